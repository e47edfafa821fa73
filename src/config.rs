use crate::errors::AppError;
use dotenv::dotenv;
use std::{env, net::SocketAddr};

const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";
const DEFAULT_ADDR: &str = "127.0.0.1:3030";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    Memory,
    Redis(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: StoreChoice,
    pub addr: SocketAddr,
}

impl Config {
    /// Reads `CLIENTES_*` variables, after loading a `.env` file if present.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("CLIENTES_STORE")
            .unwrap_or_else(|| "memory".into())
            .to_lowercase()
            .as_str()
        {
            "memory" | "mem" => StoreChoice::Memory,
            "redis" => StoreChoice::Redis(
                lookup("CLIENTES_REDIS_URL").unwrap_or_else(|| DEFAULT_REDIS_URL.into()),
            ),
            other => return Err(AppError::UnknownStore(other.into())),
        };

        let addr = lookup("CLIENTES_ADDR").unwrap_or_else(|| DEFAULT_ADDR.into());
        let addr: SocketAddr = addr
            .parse()
            .map_err(|e| AppError::InvalidAddr(addr.clone(), e))?;

        Ok(Self { store, addr })
    }
}
