use serde::Deserialize;
use validator::Validate;

use crate::domain::models::client::{Client, ClientDraft};
use crate::ui::dto::validation::{is_email, is_present};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ClientForm {
    #[validate(custom(function = "is_present"))]
    pub name: String,

    #[validate(custom(function = "is_email"))]
    pub email: String,
}

impl From<&Client> for ClientForm {
    fn from(client: &Client) -> Self {
        ClientForm {
            name: client.name.clone(),
            email: client.email.clone(),
        }
    }
}

impl From<ClientForm> for ClientDraft {
    fn from(form: ClientForm) -> Self {
        ClientDraft {
            name: form.name,
            email: form.email,
        }
        .normalized()
    }
}
