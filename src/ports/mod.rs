mod document_store;
mod id;
pub use document_store::*;
pub use id::*;
