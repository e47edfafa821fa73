#![allow(dead_code)]

use async_trait::async_trait;
use clientes::{
    adapters::{MemoryDocumentStore, MemoryDocumentStoreError},
    models::{Document, Fields},
    ports::DocumentStore,
};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Add(Fields),
    Set(String, Fields),
    Delete(String),
}

/// Memory store that remembers every call made through it.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub inner: MemoryDocumentStore,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| *call != Call::List)
            .collect()
    }

    pub fn list_count(&self) -> usize {
        self.calls().iter().filter(|call| **call == Call::List).count()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    type Error = MemoryDocumentStoreError;

    async fn list(&self, collection: &str) -> Result<Vec<Document>, Self::Error> {
        self.record(Call::List);
        self.inner.list(collection).await
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, Self::Error> {
        self.record(Call::Add(fields.clone()));
        self.inner.add(collection, fields).await
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), Self::Error> {
        self.record(Call::Set(id.into(), fields.clone()));
        self.inner.set(collection, id, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), Self::Error> {
        self.record(Call::Delete(id.into()));
        self.inner.delete(collection, id).await
    }
}
