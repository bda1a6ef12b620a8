//! handlers/recipient_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    models::recipient_model::{ListRecipientsResponse, Recipient},
    services::recipient_store::RecipientStore,
};

/// GET /api/recipients
pub async fn list_recipients_endpoint(store: web::Data<RecipientStore>) -> HttpResponse {
    let recipients = store.load().unwrap_or_default();
    let count = recipients.iter().filter(|r| r.has_address()).count();
    HttpResponse::Ok().json(ListRecipientsResponse { count, recipients })
}

/// PUT /api/recipients
pub async fn replace_recipients_endpoint(
    store: web::Data<RecipientStore>,
    body: web::Json<Vec<Recipient>>,
) -> HttpResponse {
    let recipients = body.into_inner();
    match store.replace(&recipients) {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "count": recipients.len()
        })),
        Err(e) => {
            log::error!("Error guardando recipients: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

/// POST /api/recipients/import  (body: CSV crudo)
pub async fn import_recipients_endpoint(
    store: web::Data<RecipientStore>,
    body: String,
) -> HttpResponse {
    match store.import_csv(&body) {
        Ok(count) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": format!("Scan Completed! {} entries extracted.", count)
        })),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": format!("Error during scan: {}", e)
        })),
    }
}
