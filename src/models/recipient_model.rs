//! models/recipient_model.rs

use serde::{Deserialize, Serialize};

/// Un destinatario tal como vive en el archivo de recipients.
/// `address` puede venir vacío (fila importada sin email); el worker
/// lo reporta como Outcome fallido en vez de abortar el run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipient {
    #[serde(default)]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Recipient {
    pub fn has_address(&self) -> bool {
        !self.address.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRecipientsResponse {
    pub count: usize,
    pub recipients: Vec<Recipient>,
}
