//! handlers/mod.rs
//! Módulo que agrupa los distintos handlers (dispatch, cuenta, template, etc.).

pub mod account_handler;
pub mod attachment_handler;
pub mod dispatch_handler;
pub mod logs_handler;
pub mod recipient_handler;
pub mod template_handler;
