//! handlers/attachment_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    models::attachment_model::UploadAttachmentRequest, services::attachment_store::AttachmentStore,
};

/// GET /api/attachments
pub async fn list_attachments_endpoint(store: web::Data<AttachmentStore>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "attachment_files": store.list()
    }))
}

/// POST /api/attachments  (contenido en base64)
pub async fn upload_attachment_endpoint(
    store: web::Data<AttachmentStore>,
    body: web::Json<UploadAttachmentRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    if req.filename.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "No file selected."
        }));
    }

    match store.save(&req.filename, &req.data) {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": format!("File \"{}\" uploaded successfully!", req.filename)
        })),
        Err(e) => {
            log::error!("Error subiendo adjunto: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// DELETE /api/attachments/{filename}
pub async fn delete_attachment_endpoint(
    store: web::Data<AttachmentStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let filename = path.into_inner();
    match store.delete(&filename) {
        Ok(true) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": format!("File \"{}\" deleted successfully!", filename)
        })),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "success": false,
            "message": format!("File \"{}\" not found.", filename)
        })),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": format!("Error deleting file: {}", e)
        })),
    }
}
