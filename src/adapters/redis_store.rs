use crate::{
    adapters::UuidGenerator,
    models::{Document, Fields},
    ports::{DocumentStore, IDGenerator},
};
use async_trait::async_trait;
use redis::{aio::Connection, Client, ErrorKind, RedisError};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Document store on Redis.
///
/// A document body is kept as a JSON string under `{collection}:{id}` and the
/// order of a collection as a list of ids under `{collection}`.
#[derive(Clone)]
pub struct RedisDocumentStore<I = UuidGenerator> {
    connection: Arc<Mutex<Connection>>,
    ids: I,
}

impl RedisDocumentStore {
    pub async fn connect(url: &str) -> Result<Self, RedisError> {
        Self::connect_with_id_generator(url, UuidGenerator).await
    }
}

impl<I> RedisDocumentStore<I> {
    pub async fn connect_with_id_generator(url: &str, ids: I) -> Result<Self, RedisError> {
        let client = Client::open(url)?;
        let connection = client.get_async_connection().await?;
        let connection = Arc::new(Mutex::new(connection));

        Ok(Self { connection, ids })
    }
}

fn document_key(collection: &str, id: &str) -> String {
    format!("{collection}:{id}")
}

fn encode(fields: &Fields) -> Result<String, RedisError> {
    serde_json::to_string(fields).map_err(|e| {
        RedisError::from((ErrorKind::TypeError, "unencodable document body", e.to_string()))
    })
}

fn decode(body: &str) -> Result<Fields, RedisError> {
    serde_json::from_str(body).map_err(|e| {
        RedisError::from((ErrorKind::TypeError, "invalid document body", e.to_string()))
    })
}

#[async_trait]
impl<I> DocumentStore for RedisDocumentStore<I>
where
    I: IDGenerator + Send + Sync,
{
    type Error = RedisError;

    async fn list(&self, collection: &str) -> Result<Vec<Document>, Self::Error> {
        let mut connection = self.connection.lock().await;

        let ids: Vec<String> = redis::cmd("LRANGE")
            .arg(collection)
            .arg(0)
            .arg(-1)
            .query_async(&mut *connection)
            .await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys: Vec<String> = ids.iter().map(|id| document_key(collection, id)).collect();
        let bodies: Vec<Option<String>> = redis::cmd("MGET")
            .arg(keys)
            .query_async(&mut *connection)
            .await?;

        // ids whose body vanished between the two reads are skipped
        ids.into_iter()
            .zip(bodies)
            .filter_map(|(id, body)| body.map(|body| (id, body)))
            .map(|(id, body)| decode(&body).map(|fields| Document::new(id, fields)))
            .collect()
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, Self::Error> {
        let id = self.ids.generate();
        let body = encode(&fields)?;
        let mut connection = self.connection.lock().await;

        let _: () = redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(document_key(collection, &id))
            .arg(body)
            .ignore()
            .cmd("RPUSH")
            .arg(collection)
            .arg(&id)
            .ignore()
            .query_async(&mut *connection)
            .await?;

        Ok(id)
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), Self::Error> {
        let key = document_key(collection, id);
        let body = encode(&fields)?;
        let mut connection = self.connection.lock().await;

        let known: bool = redis::cmd("EXISTS")
            .arg(&key)
            .query_async(&mut *connection)
            .await?;

        let mut pipe = redis::pipe();
        pipe.atomic().cmd("SET").arg(&key).arg(body).ignore();
        if !known {
            pipe.cmd("RPUSH").arg(collection).arg(id).ignore();
        }
        let _: () = pipe.query_async(&mut *connection).await?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), Self::Error> {
        let mut connection = self.connection.lock().await;

        let _: () = redis::pipe()
            .atomic()
            .cmd("DEL")
            .arg(document_key(collection, id))
            .ignore()
            .cmd("LREM")
            .arg(collection)
            .arg(0)
            .arg(id)
            .ignore()
            .query_async(&mut *connection)
            .await?;

        Ok(())
    }
}
