//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod account_model;
pub mod attachment_model;
pub mod progress_model;
pub mod recipient_model;
pub mod template_model;
