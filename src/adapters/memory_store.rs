use crate::adapters::UuidGenerator;
use crate::models::{Document, Fields};
use crate::ports::{DocumentStore, IDGenerator};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// In-process document store. Each collection keeps its documents in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore<I = UuidGenerator> {
    collections: Arc<Mutex<HashMap<String, Vec<Document>>>>,
    fail: Arc<AtomicBool>,
    ids: I,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    pub fn failing() -> Self {
        let store = Self::new();
        store.set_failing(true);
        store
    }
}

impl<I> MemoryDocumentStore<I> {
    pub fn with_id_generator(ids: I) -> Self {
        Self {
            collections: Arc::new(Mutex::new(HashMap::new())),
            fail: Arc::new(AtomicBool::new(false)),
            ids,
        }
    }

    /// Makes every subsequent call fail until switched back. Shared by clones.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    fn failing_now(&self) -> bool {
        self.fail.load(Ordering::SeqCst)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MemoryDocumentStoreError {
    #[error("failed to list documents of {0}")]
    ListError(String),
    #[error("failed to add document to {0}")]
    AddError(String),
    #[error("failed to set document {1} in {0}")]
    SetError(String, String),
    #[error("failed to delete document {1} from {0}")]
    DeleteError(String, String),
}

#[async_trait]
impl<I> DocumentStore for MemoryDocumentStore<I>
where
    I: IDGenerator + Send + Sync,
{
    type Error = MemoryDocumentStoreError;

    async fn list(&self, collection: &str) -> Result<Vec<Document>, Self::Error> {
        if self.failing_now() {
            return Err(MemoryDocumentStoreError::ListError(collection.into()));
        }

        let collections = self.collections.lock().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, Self::Error> {
        if self.failing_now() {
            return Err(MemoryDocumentStoreError::AddError(collection.into()));
        }

        let id = self.ids.generate();
        let mut collections = self.collections.lock().await;
        collections
            .entry(collection.into())
            .or_default()
            .push(Document::new(id.clone(), fields));
        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), Self::Error> {
        if self.failing_now() {
            return Err(MemoryDocumentStoreError::SetError(
                collection.into(),
                id.into(),
            ));
        }

        let mut collections = self.collections.lock().await;
        let documents = collections.entry(collection.into()).or_default();
        match documents.iter_mut().find(|document| document.id == id) {
            Some(document) => document.fields = fields,
            None => documents.push(Document::new(id, fields)),
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), Self::Error> {
        if self.failing_now() {
            return Err(MemoryDocumentStoreError::DeleteError(
                collection.into(),
                id.into(),
            ));
        }

        let mut collections = self.collections.lock().await;
        if let Some(documents) = collections.get_mut(collection) {
            documents.retain(|document| document.id != id);
        }
        Ok(())
    }
}
