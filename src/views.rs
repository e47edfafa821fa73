use crate::{
    controllers::{FormMode, ScreenState},
    models::Cliente,
};
use serde::Serialize;

pub const TITLE: &str = "Cadastro de Clientes";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub method: &'static str,
    pub path: String,
}

/// One row of the list: the record and its edit/delete triggers.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ClienteItem {
    pub id: String,
    pub nome: String,
    pub telefone: String,
    pub edit: Action,
    pub delete: Action,
}

impl ClienteItem {
    pub fn render(cliente: &Cliente) -> Self {
        Self {
            id: cliente.id.clone(),
            nome: cliente.nome.clone(),
            telefone: cliente.telefone.clone(),
            edit: Action {
                label: "Editar",
                method: "POST",
                path: format!("/clientes/{}/edit", cliente.id),
            },
            delete: Action {
                label: "Excluir",
                method: "DELETE",
                path: format!("/clientes/{}", cliente.id),
            },
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub title: &'static str,
    pub nome: FieldView,
    pub telefone: FieldView,
    pub editing_id: String,
    pub submit_label: &'static str,
    pub clientes: Vec<ClienteItem>,
}

impl ScreenView {
    pub fn render(state: &ScreenState) -> Self {
        let submit_label = match state.mode() {
            FormMode::Create => "Cadastrar",
            FormMode::Editing(_) => "Atualizar",
        };

        Self {
            title: TITLE,
            nome: FieldView {
                label: "Nome:",
                value: state.form().nome().into(),
            },
            telefone: FieldView {
                label: "Telefone:",
                value: state.form().telefone().into(),
            },
            editing_id: state.mode().editing_id().into(),
            submit_label,
            clientes: state.clientes().iter().map(ClienteItem::render).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{cliente_fields, Document};

    #[test]
    fn item_links_back_to_its_record() {
        let item = ClienteItem::render(&Cliente::new("a1", "Ana", "123"));

        assert_eq!(item.nome, "Ana");
        assert_eq!(item.edit.path, "/clientes/a1/edit");
        assert_eq!(item.delete.path, "/clientes/a1");
        assert_eq!(item.delete.label, "Excluir");
    }

    #[test]
    fn submit_label_follows_mode() {
        let mut state = ScreenState::new();
        assert_eq!(ScreenView::render(&state).submit_label, "Cadastrar");

        state.begin_edit(&Cliente::new("a1", "Ana", "123"));
        let view = ScreenView::render(&state);

        assert_eq!(view.submit_label, "Atualizar");
        assert_eq!(view.editing_id, "a1");
        assert_eq!(view.nome.value, "Ana");
    }

    #[test]
    fn renders_every_loaded_record() {
        let mut state = ScreenState::new();
        state.replace_clientes(&[
            Document::new("a", cliente_fields("Ana", "1")),
            Document::new("b", cliente_fields("Bia", "2")),
        ]);

        let view = ScreenView::render(&state);

        assert_eq!(view.title, "Cadastro de Clientes");
        assert_eq!(view.clientes.len(), 2);
        assert_eq!(view.clientes[1].telefone, "2");
    }
}
