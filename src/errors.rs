use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown store '{0}', expected memory or redis")]
    UnknownStore(String),
    #[error("invalid listen address '{0}': {1}")]
    InvalidAddr(String, std::net::AddrParseError),
    #[error("couldn't connect to redis: {0}")]
    Redis(#[from] redis::RedisError),
}
