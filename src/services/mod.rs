//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod attachment_store;
pub mod credential_store;
pub mod dispatch_service;
pub mod recipient_store;
pub mod send_log;
pub mod template_store;
pub mod transport;
