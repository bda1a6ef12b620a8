//! models/template_model.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SaveTemplateRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateResponse {
    pub content: String,
}
