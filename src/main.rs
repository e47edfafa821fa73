use clientes::{
    adapters::{MemoryDocumentStore, RedisDocumentStore},
    config::{Config, StoreChoice},
    controllers::ClientesController,
    errors::AppError,
    handlers::routes,
    ports::DocumentStore,
};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    match config.store {
        StoreChoice::Memory => {
            log::info!("using in-memory store");
            serve(MemoryDocumentStore::new(), config.addr).await;
        }
        StoreChoice::Redis(url) => {
            log::info!("using redis store at {}", url);
            let db = RedisDocumentStore::connect(&url).await?;
            serve(db, config.addr).await;
        }
    }

    Ok(())
}

async fn serve<D: DocumentStore + Clone + Send + Sync + 'static>(db: D, addr: SocketAddr) {
    let controller = ClientesController::new(db);

    log::info!("listening on {}", addr);
    warp::serve(routes(controller)).run(addr).await;
}
