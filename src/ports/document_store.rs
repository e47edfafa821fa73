use crate::models::{Document, Fields};
use async_trait::async_trait;
use std::error::Error;

/// Collection-scoped operations of a remote document store.
///
/// Every call resolves to either success or failure; callers decide whether to
/// await the result.
#[async_trait]
pub trait DocumentStore {
    type Error: Error + Send + Sync + 'static;
    async fn list(&self, collection: &str) -> Result<Vec<Document>, Self::Error>;
    /// Stores a new document and returns the identifier the store assigned to it.
    async fn add(&self, collection: &str, fields: Fields) -> Result<String, Self::Error>;
    /// Overwrites the document body; creates the document if `id` is unknown.
    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), Self::Error>;
    async fn delete(&self, collection: &str, id: &str) -> Result<(), Self::Error>;
}
