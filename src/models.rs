use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CLIENTES_COLLECTION: &str = "clientes";

/// Schema-less body of a stored document.
pub type Fields = Map<String, Value>;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Cliente {
    pub id: String,
    pub nome: String,
    pub telefone: String,
}

impl Cliente {
    pub fn new(
        id: impl Into<String>,
        nome: impl Into<String>,
        telefone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            nome: nome.into(),
            telefone: telefone.into(),
        }
    }

    pub fn from_document(document: &Document) -> Self {
        Self {
            id: document.id.clone(),
            nome: field_to_string(document.fields.get("nome")),
            telefone: field_to_string(document.fields.get("telefone")),
        }
    }
}

/// A document as returned by a store listing, in store order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

pub fn cliente_fields(nome: &str, telefone: &str) -> Fields {
    let mut fields = Fields::new();
    fields.insert("nome".into(), Value::String(nome.into()));
    fields.insert("telefone".into(), Value::String(telefone.into()));
    fields
}

// Missing and null fields render as "null"; non-strings as their JSON text.
fn field_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".into(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
