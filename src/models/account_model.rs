//! models/account_model.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SaveAccountRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub current_account: Option<String>,
}
