//! config/mailer_config.rs
//! Configuración global del mailer (rutas de archivos, SMTP, pacing, etc.)

/// Configuración global del servicio, con valores por defecto
/// (cada campo puede sobreescribirse por variable de entorno)
#[derive(Debug, Clone)]
pub struct MailerConfig {
    pub template_file: String,
    pub credentials_file: String,
    pub recipients_file: String,
    pub log_file: String,
    pub attachments_dir: String,

    pub smtp_host: String,
    pub smtp_port: u16,

    /// Pausa entre envíos consecutivos (rate limit del proveedor)
    pub send_delay_ms: u64,
    /// Token literal que se sustituye por el nombre del destinatario
    pub placeholder_token: String,
    /// Nombre usado cuando el destinatario no trae display_name
    pub default_display_name: String,
    /// Si es true, el template se relee de disco en cada envío
    /// (permite editarlo con un run en curso). Si es false se lee
    /// una sola vez al arrancar el run.
    pub reread_template_per_send: bool,
}

impl Default for MailerConfig {
    fn default() -> Self {
        MailerConfig {
            template_file: "MailTemplate/template1.txt".to_string(),
            credentials_file: "credentials.txt".to_string(),
            recipients_file: "recipients.json".to_string(),
            log_file: "logs.txt".to_string(),
            attachments_dir: "Files".to_string(),
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            send_delay_ms: 500,
            placeholder_token: "name".to_string(),
            default_display_name: "Valued Customer".to_string(),
            reread_template_per_send: true,
        }
    }
}

impl MailerConfig {
    /// Construye la config partiendo de los defaults y aplicando
    /// las variables de entorno presentes (cargadas antes con dotenv).
    pub fn from_env() -> Self {
        let mut cfg = MailerConfig::default();

        if let Ok(v) = std::env::var("MAILER_TEMPLATE_FILE") {
            cfg.template_file = v;
        }
        if let Ok(v) = std::env::var("MAILER_CREDENTIALS_FILE") {
            cfg.credentials_file = v;
        }
        if let Ok(v) = std::env::var("MAILER_RECIPIENTS_FILE") {
            cfg.recipients_file = v;
        }
        if let Ok(v) = std::env::var("MAILER_LOG_FILE") {
            cfg.log_file = v;
        }
        if let Ok(v) = std::env::var("MAILER_ATTACHMENTS_DIR") {
            cfg.attachments_dir = v;
        }
        if let Ok(v) = std::env::var("MAILER_SMTP_HOST") {
            cfg.smtp_host = v;
        }
        if let Ok(v) = std::env::var("MAILER_SMTP_PORT") {
            if let Ok(port) = v.parse() {
                cfg.smtp_port = port;
            }
        }
        if let Ok(v) = std::env::var("MAILER_SEND_DELAY_MS") {
            if let Ok(ms) = v.parse() {
                cfg.send_delay_ms = ms;
            }
        }
        if let Ok(v) = std::env::var("MAILER_REREAD_TEMPLATE") {
            cfg.reread_template_per_send = v != "0" && v.to_lowercase() != "false";
        }

        cfg
    }
}
