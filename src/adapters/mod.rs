mod memory_store;
mod redis_store;
mod uuid_generator;
pub use memory_store::*;
pub use redis_store::*;
pub use uuid_generator::*;
