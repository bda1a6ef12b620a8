//! handlers/account_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::{
    models::account_model::{AccountResponse, SaveAccountRequest},
    services::credential_store::CredentialStore,
};

/// GET /api/account
pub async fn get_account_endpoint(store: web::Data<CredentialStore>) -> HttpResponse {
    HttpResponse::Ok().json(AccountResponse {
        current_account: store.current_user(),
    })
}

/// POST /api/account
pub async fn save_account_endpoint(
    store: web::Data<CredentialStore>,
    body: web::Json<SaveAccountRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    if req.username.is_empty() || req.password.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Please provide both username and password."
        }));
    }

    match store.save(&req.username, &req.password) {
        Ok(()) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Credentials saved successfully!"
        })),
        Err(e) => {
            log::error!("Error guardando credenciales: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": format!("Error saving credentials: {}", e)
            }))
        }
    }
}

/// DELETE /api/account
pub async fn remove_account_endpoint(store: web::Data<CredentialStore>) -> HttpResponse {
    match store.remove() {
        Ok(true) => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Account removed successfully!"
        })),
        Ok(false) => HttpResponse::NotFound().json(json!({
            "success": false,
            "message": "No account found to remove."
        })),
        Err(e) => HttpResponse::InternalServerError().json(json!({
            "success": false,
            "error": format!("Error removing account: {}", e)
        })),
    }
}
