use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use crate::config::mailer_config::MailerConfig;
use crate::logger::init_logger;
use crate::services::attachment_store::AttachmentStore;
use crate::services::credential_store::CredentialStore;
use crate::services::dispatch_service::DispatchService;
use crate::services::recipient_store::RecipientStore;
use crate::services::send_log::SendLog;
use crate::services::template_store::TemplateStore;
use crate::services::transport::{MailTransport, SmtpMailTransport};

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;

#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = MailerConfig::from_env();

    // Stores de archivos planos
    let recipient_store = RecipientStore::new(&config.recipients_file);
    let template_store = TemplateStore::new(&config.template_file);
    let credential_store = CredentialStore::new(&config.credentials_file);
    let attachment_store = AttachmentStore::new(&config.attachments_dir);
    let send_log = SendLog::new(&config.log_file);

    // Directorios y template por defecto al arrancar
    attachment_store
        .ensure_dir()
        .expect("No se pudo crear el directorio de adjuntos");
    template_store
        .ensure_default()
        .expect("No se pudo crear el template por defecto");

    // Transporte SMTP real (los tests inyectan un stub por el trait)
    let transport: Arc<dyn MailTransport> = Arc::new(SmtpMailTransport::new(
        credential_store.clone(),
        &config.smtp_host,
        config.smtp_port,
    ));

    let dispatch_service = DispatchService::new(
        recipient_store.clone(),
        template_store.clone(),
        attachment_store.clone(),
        credential_store.clone(),
        send_log.clone(),
        transport,
        config.clone(),
    );

    // Levantar servidor
    log::info!("Levantando servidor en 0.0.0.0:5000");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(recipient_store.clone()))
            .app_data(web::Data::new(template_store.clone()))
            .app_data(web::Data::new(credential_store.clone()))
            .app_data(web::Data::new(attachment_store.clone()))
            .app_data(web::Data::new(send_log.clone()))
            .app_data(web::Data::new(dispatch_service.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind(("0.0.0.0", 5000))?
    .run()
    .await
}
