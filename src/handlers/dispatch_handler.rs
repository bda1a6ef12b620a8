//! handlers/dispatch_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::services::dispatch_service::{DispatchService, StartError};

/// POST /api/dispatch/start
pub async fn start_dispatch_endpoint(dispatch: web::Data<DispatchService>) -> HttpResponse {
    match dispatch.start_run().await {
        // El handle del worker se descarta: fire-and-forget, el caller
        // hace polling del progreso.
        Ok(_handle) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Mail dispatch started."
        })),
        Err(e) => {
            log::warn!("Start rechazado: {}", e);
            let status = match e {
                StartError::AlreadyInProgress => actix_web::http::StatusCode::CONFLICT,
                StartError::NoData | StartError::NoCredentials => {
                    actix_web::http::StatusCode::BAD_REQUEST
                }
            };
            HttpResponse::build(status).json(json!({
                "success": false,
                "message": e.to_string()
            }))
        }
    }
}

/// GET /api/dispatch/progress
pub async fn dispatch_progress_endpoint(dispatch: web::Data<DispatchService>) -> HttpResponse {
    let snapshot = dispatch.progress_snapshot().await;
    HttpResponse::Ok().json(snapshot)
}
