use crate::{
    models::{Cliente, Document, Fields},
    request::{FormRequest, FormValidationError},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Editing(String),
}

impl FormMode {
    /// Id of the record being edited, empty in create mode.
    pub fn editing_id(&self) -> &str {
        match self {
            FormMode::Create => "",
            FormMode::Editing(id) => id,
        }
    }
}

/// The remote write a submit resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Add(Fields),
    Set { id: String, fields: Fields },
}

/// Transient state of the screen: the form and the last loaded list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    form: FormRequest,
    mode: FormMode,
    clientes: Vec<Cliente>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormRequest {
        &self.form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn clientes(&self) -> &[Cliente] {
        &self.clientes
    }

    pub fn find(&self, id: &str) -> Option<&Cliente> {
        self.clientes.iter().find(|cliente| cliente.id == id)
    }

    pub fn update_form(&mut self, form: FormRequest) {
        self.form = form;
    }

    pub fn begin_edit(&mut self, cliente: &Cliente) {
        self.form = FormRequest::new(cliente.nome.clone(), cliente.telefone.clone());
        self.mode = FormMode::Editing(cliente.id.clone());
    }

    pub fn reset(&mut self) {
        self.form = FormRequest::default();
        self.mode = FormMode::Create;
    }

    pub fn submission(&self) -> Result<Submission, FormValidationError> {
        self.form.validate()?;

        let fields = self.form.fields();
        Ok(match &self.mode {
            FormMode::Create => Submission::Add(fields),
            FormMode::Editing(id) => Submission::Set {
                id: id.clone(),
                fields,
            },
        })
    }

    pub fn replace_clientes(&mut self, documents: &[Document]) {
        self.clientes = documents.iter().map(Cliente::from_document).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cliente_fields;

    #[test]
    fn starts_empty_in_create_mode() {
        let state = ScreenState::new();

        assert_eq!(state.form(), &FormRequest::new("", ""));
        assert_eq!(state.mode().editing_id(), "");
        assert!(state.clientes().is_empty());
    }

    #[test]
    fn begin_edit_copies_the_record() {
        let mut state = ScreenState::new();

        state.begin_edit(&Cliente::new("X", "Ana", "123"));

        assert_eq!(state.form(), &FormRequest::new("Ana", "123"));
        assert_eq!(state.mode(), &FormMode::Editing("X".into()));
    }

    #[test]
    fn editing_another_record_switches_target() {
        let mut state = ScreenState::new();
        state.begin_edit(&Cliente::new("X", "Ana", "123"));

        state.begin_edit(&Cliente::new("Y", "Bia", "456"));

        assert_eq!(state.mode().editing_id(), "Y");
    }

    #[test]
    fn submission_follows_mode() {
        let mut state = ScreenState::new();
        state.update_form(FormRequest::new("Ana", "123"));
        assert_eq!(
            state.submission(),
            Ok(Submission::Add(cliente_fields("Ana", "123")))
        );

        state.begin_edit(&Cliente::new("X", "Ana", "123"));
        assert_eq!(
            state.submission(),
            Ok(Submission::Set {
                id: "X".into(),
                fields: cliente_fields("Ana", "123"),
            })
        );
    }

    #[test]
    fn submission_rejects_empty_fields() {
        let mut state = ScreenState::new();
        state.update_form(FormRequest::new("Ana", ""));

        assert_eq!(state.submission(), Err(FormValidationError::TelefoneEmpty));
    }

    #[test]
    fn reset_returns_to_create() {
        let mut state = ScreenState::new();
        state.begin_edit(&Cliente::new("X", "Ana", "123"));

        state.reset();

        assert_eq!(state.form(), &FormRequest::default());
        assert_eq!(state.mode(), &FormMode::Create);
    }

    #[test]
    fn replace_clientes_keeps_store_order() {
        let mut state = ScreenState::new();
        state.replace_clientes(&[
            Document::new("b", cliente_fields("Bia", "2")),
            Document::new("a", cliente_fields("Ana", "1")),
        ]);

        let ids: Vec<_> = state.clientes().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(state.find("a"), Some(&Cliente::new("a", "Ana", "1")));
        assert_eq!(state.find("z"), None);
    }
}
