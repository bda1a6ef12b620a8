//! services/transport.rs
//! Capa de transporte: manda UN mensaje compuesto a UNA dirección.
//! El trait existe para poder stubear el envío en tests; la
//! implementación real habla SMTP con lettre y es dueña de toda la
//! autenticación (carga credenciales por envío, igual que el flujo
//! original, para que un cambio de cuenta aplique a mitad de run).

use std::{fs, sync::Arc};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use lettre::{
    message::{
        header::{ContentDisposition, ContentType},
        Body, Mailbox, MultiPart, SinglePart,
    },
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::services::credential_store::CredentialStore;

#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Envío síncrono desde el punto de vista del worker: la función
    /// devuelve cuando el mensaje fue aceptado o rechazado. Sin timeout:
    /// un transporte colgado cuelga el run entero (decisión explícita).
    async fn send(
        &self,
        to_address: &str,
        subject: &str,
        body: &str,
        attachment_paths: &[std::path::PathBuf],
    ) -> Result<()>;
}

#[derive(Clone)]
pub struct SmtpMailTransport {
    credentials: CredentialStore,
    smtp_host: Arc<String>,
    smtp_port: u16,
}

impl SmtpMailTransport {
    pub fn new(credentials: CredentialStore, smtp_host: &str, smtp_port: u16) -> Self {
        Self {
            credentials,
            smtp_host: Arc::new(smtp_host.to_string()),
            smtp_port,
        }
    }

    fn build_message(
        &self,
        sender: &str,
        to_address: &str,
        subject: &str,
        body: &str,
        attachment_paths: &[std::path::PathBuf],
    ) -> Result<Message> {
        let from: Mailbox = sender.parse().context("Invalid sender address")?;
        let to: Mailbox = to_address.parse().context("Invalid recipient address")?;

        let text_part = SinglePart::builder()
            .header(ContentType::parse("text/plain; charset=utf-8")?)
            .body(body.to_string());

        let mut multipart = MultiPart::mixed().singlepart(text_part);

        for path in attachment_paths {
            let data = fs::read(path)
                .with_context(|| format!("Error attaching file {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "attachment".to_string());

            let part = SinglePart::builder()
                .header(ContentType::parse("application/octet-stream")?)
                .header(ContentDisposition::attachment(&filename))
                .body(Body::new(data));
            multipart = multipart.singlepart(part);
        }

        Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .multipart(multipart)
            .context("No se pudo construir el mensaje MIME")
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(
        &self,
        to_address: &str,
        subject: &str,
        body: &str,
        attachment_paths: &[std::path::PathBuf],
    ) -> Result<()> {
        let creds = self
            .credentials
            .load()
            .ok_or_else(|| anyhow!("No credentials found. Please add your account first."))?;

        let message = self.build_message(
            &creds.username,
            to_address,
            subject,
            body,
            attachment_paths,
        )?;

        // STARTTLS en el puerto submission (587 por defecto)
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_host)?
            .port(self.smtp_port)
            .credentials(Credentials::new(creds.username, creds.password))
            .build();

        mailer
            .send(message)
            .await
            .with_context(|| format!("Error sending email to {}", to_address))?;

        Ok(())
    }
}
