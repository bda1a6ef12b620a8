//! handlers/logs_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::services::send_log::SendLog;

/// GET /api/logs
pub async fn view_logs_endpoint(send_log: web::Data<SendLog>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "logs": send_log.read_all()
    }))
}
