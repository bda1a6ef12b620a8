//! app.rs
use crate::handlers::{
    account_handler, attachment_handler, dispatch_handler, logs_handler, recipient_handler,
    template_handler,
};
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/dispatch")
                    .route(
                        "/start",
                        web::post().to(dispatch_handler::start_dispatch_endpoint),
                    )
                    .route(
                        "/progress",
                        web::get().to(dispatch_handler::dispatch_progress_endpoint),
                    ),
            )
            .service(
                web::scope("/recipients")
                    .route(
                        "",
                        web::get().to(recipient_handler::list_recipients_endpoint),
                    )
                    .route(
                        "",
                        web::put().to(recipient_handler::replace_recipients_endpoint),
                    )
                    .route(
                        "/import",
                        web::post().to(recipient_handler::import_recipients_endpoint),
                    ),
            )
            .service(
                web::scope("/template")
                    .route("", web::get().to(template_handler::get_template_endpoint))
                    .route(
                        "",
                        web::post().to(template_handler::save_template_endpoint),
                    ),
            )
            .service(
                web::scope("/account")
                    .route("", web::get().to(account_handler::get_account_endpoint))
                    .route("", web::post().to(account_handler::save_account_endpoint))
                    .route(
                        "",
                        web::delete().to(account_handler::remove_account_endpoint),
                    ),
            )
            .service(
                web::scope("/attachments")
                    .route(
                        "",
                        web::get().to(attachment_handler::list_attachments_endpoint),
                    )
                    .route(
                        "",
                        web::post().to(attachment_handler::upload_attachment_endpoint),
                    )
                    .route(
                        "/{filename}",
                        web::delete().to(attachment_handler::delete_attachment_endpoint),
                    ),
            )
            .service(
                web::scope("/logs").route("", web::get().to(logs_handler::view_logs_endpoint)),
            ),
    );
}
