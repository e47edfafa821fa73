use crate::models::{cliente_fields, Fields};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current values of the two text fields of the screen.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRequest {
    nome: String,
    telefone: String,
}

impl FormRequest {
    pub fn new(nome: impl Into<String>, telefone: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            telefone: telefone.into(),
        }
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn telefone(&self) -> &str {
        &self.telefone
    }

    pub fn fields(&self) -> Fields {
        cliente_fields(&self.nome, &self.telefone)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormValidationError {
    #[error("nome is empty")]
    NomeEmpty,
    #[error("telefone is empty")]
    TelefoneEmpty,
}

impl FormRequest {
    pub fn validate(&self) -> Result<(), FormValidationError> {
        use FormValidationError::*;

        if self.nome.is_empty() {
            return Err(NomeEmpty);
        }

        if self.telefone.is_empty() {
            return Err(TelefoneEmpty);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_fields() {
        assert_eq!(
            FormRequest::new("", "123").validate(),
            Err(FormValidationError::NomeEmpty)
        );
        assert_eq!(
            FormRequest::new("Ana", "").validate(),
            Err(FormValidationError::TelefoneEmpty)
        );
        assert_eq!(FormRequest::new("Ana", "123").validate(), Ok(()));
    }

    #[test]
    fn whitespace_counts_as_content() {
        assert!(FormRequest::new(" ", " ").validate().is_ok());
    }
}
