//! handlers/template_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    models::template_model::{SaveTemplateRequest, TemplateResponse},
    services::template_store::TemplateStore,
};

/// GET /api/template
pub async fn get_template_endpoint(store: web::Data<TemplateStore>) -> HttpResponse {
    // Si alguien borró el archivo a mano lo recreamos con el default
    if let Err(e) = store.ensure_default() {
        log::error!("No se pudo recrear el template: {:?}", e);
    }

    match store.read_content() {
        Ok(content) => HttpResponse::Ok().json(TemplateResponse { content }),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": e.to_string()
        })),
    }
}

/// POST /api/template
pub async fn save_template_endpoint(
    store: web::Data<TemplateStore>,
    body: web::Json<SaveTemplateRequest>,
) -> HttpResponse {
    match store.write_content(&body.into_inner().content) {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Template saved successfully!"
        })),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": format!("Error saving template: {}", e)
        })),
    }
}
