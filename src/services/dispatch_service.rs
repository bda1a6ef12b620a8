//! services/dispatch_service.rs
//! El motor de despacho: máquina de estados del run, worker en
//! background que recorre los destinatarios en orden (un solo run a la
//! vez) y log durable de envíos exitosos.

use std::{path::PathBuf, sync::Arc};

use tokio::{sync::Mutex, task::JoinHandle, time::Duration};

use crate::{
    config::mailer_config::MailerConfig,
    models::{
        progress_model::{JobProgress, JobStatus, Outcome},
        recipient_model::Recipient,
    },
    services::{
        attachment_store::AttachmentStore,
        credential_store::CredentialStore,
        recipient_store::RecipientStore,
        send_log::SendLog,
        template_store::{RawTemplate, TemplateStore},
        transport::MailTransport,
    },
};

/// Errores de precondición del start. Se devuelven al caller de forma
/// síncrona y no cambian el estado del job.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StartError {
    #[error("Mail dispatch is already in progress.")]
    AlreadyInProgress,
    #[error("No recipient data found. Please import recipients first.")]
    NoData,
    #[error("No account credentials found. Please add your account first.")]
    NoCredentials,
}

#[derive(Clone)]
pub struct DispatchService {
    recipients: RecipientStore,
    template: TemplateStore,
    attachments: AttachmentStore,
    credentials: CredentialStore,
    send_log: SendLog,
    transport: Arc<dyn MailTransport>,
    progress: Arc<Mutex<JobProgress>>,
    config: MailerConfig,
}

impl DispatchService {
    pub fn new(
        recipients: RecipientStore,
        template: TemplateStore,
        attachments: AttachmentStore,
        credentials: CredentialStore,
        send_log: SendLog,
        transport: Arc<dyn MailTransport>,
        config: MailerConfig,
    ) -> Self {
        Self {
            recipients,
            template,
            attachments,
            credentials,
            send_log,
            transport,
            progress: Arc::new(Mutex::new(JobProgress::idle())),
            config,
        }
    }

    /// Copia del estado actual. El lock se sostiene solo lo que tarda
    /// el clone; nunca bloquea contra el I/O del worker.
    pub async fn progress_snapshot(&self) -> JobProgress {
        self.progress.lock().await.clone()
    }

    /// Valida precondiciones y agenda el run en background. Devuelve el
    /// JoinHandle del worker (el handler HTTP lo descarta; los tests lo
    /// usan para esperar el final del run).
    ///
    /// Las lecturas de archivos (count, credenciales) pasan ANTES de
    /// tomar el lock; la sección crítica es solo el check-and-set de
    /// `status`, que es lo que garantiza single-flight.
    pub async fn start_run(&self) -> Result<JoinHandle<()>, StartError> {
        let addressable = self.recipients.count_addressable();
        let has_credentials = self.credentials.load().is_some();

        let mut progress = self.progress.lock().await;
        if progress.status == JobStatus::Sending {
            return Err(StartError::AlreadyInProgress);
        }
        if addressable == 0 {
            return Err(StartError::NoData);
        }
        if !has_credentials {
            return Err(StartError::NoCredentials);
        }

        progress.total = addressable;
        progress.current = 0;
        progress.results = Vec::new();
        progress.status = JobStatus::Sending;
        drop(progress);

        log::info!("Run de envío agendado ({} destinatarios)", addressable);

        let engine = self.clone();
        Ok(tokio::spawn(async move { engine.run_worker().await }))
    }

    /// Cuerpo del worker. Procesa el snapshot de destinatarios en orden,
    /// un envío a la vez, aislando los fallos por item. Nunca devuelve
    /// error: todo fallo termina como Outcome o como status Error.
    pub(crate) async fn run_worker(&self) {
        // Snapshot único de destinatarios; si esto falla el run muere acá.
        let recipients = match self.recipients.load() {
            Ok(recipients) => recipients,
            Err(e) => {
                log::error!("No se pudo leer el recipient store: {:?}", e);
                let mut progress = self.progress.lock().await;
                progress.status = JobStatus::Error;
                progress
                    .results
                    .push(Outcome::failed("", format!("No data found: {}", e)));
                return;
            }
        };

        // Snapshot único de adjuntos (altas/bajas posteriores no aplican
        // a este run).
        let attachment_paths = self.attachments.snapshot_paths();

        {
            // El count del start y el snapshot pueden diferir si el
            // archivo cambió en el medio; total refleja el snapshot real.
            let mut progress = self.progress.lock().await;
            progress.total = recipients.len();
        }

        let pacing = Duration::from_millis(self.config.send_delay_ms);
        let mut cached_template: Option<RawTemplate> = None;

        for (i, recipient) in recipients.iter().enumerate() {
            if !recipient.has_address() {
                let mut progress = self.progress.lock().await;
                progress.results.push(Outcome::failed(
                    "",
                    format!("missing address for entry {}", i),
                ));
                progress.current = i + 1;
                continue; // sin pausa: acá no se habló con el proveedor
            }

            let outcome = self
                .send_one(recipient, &attachment_paths, &mut cached_template)
                .await;

            {
                let mut progress = self.progress.lock().await;
                progress.results.push(outcome);
                progress.current = i + 1;
            }

            // Pausa fija entre envíos para no pegarle al rate limit
            tokio::time::sleep(pacing).await;
        }

        let mut progress = self.progress.lock().await;
        progress.status = JobStatus::Completed;
        log::info!(
            "Run completado: {}/{} intentos",
            progress.current,
            progress.total
        );
    }

    /// Un intento de envío: personaliza el template, manda por el
    /// transporte y registra el éxito en el log durable.
    async fn send_one(
        &self,
        recipient: &Recipient,
        attachment_paths: &[PathBuf],
        cached_template: &mut Option<RawTemplate>,
    ) -> Outcome {
        let address = recipient.address.trim();
        let display_name = recipient
            .display_name
            .clone()
            .unwrap_or_else(|| self.config.default_display_name.clone());

        // Releer el template por envío es deliberado: permite editarlo
        // con el run en curso. Con reread desactivado se lee una vez y
        // se cachea.
        let raw = match cached_template {
            Some(raw) if !self.config.reread_template_per_send => raw.clone(),
            _ => match self.template.load_raw() {
                Ok(raw) => {
                    *cached_template = Some(raw.clone());
                    raw
                }
                Err(e) => {
                    return Outcome::failed(address, format!("Error reading template file: {}", e))
                }
            },
        };

        let (subject, body) = raw.personalize(&self.config.placeholder_token, &display_name);

        match self
            .transport
            .send(address, &subject, &body, attachment_paths)
            .await
        {
            Ok(()) => {
                // El log durable solo registra éxitos; los fallos viven
                // en los Outcomes en memoria.
                if let Err(e) = self.send_log.append(address) {
                    return Outcome::failed(
                        address,
                        format!("Error writing send log for {}: {}", address, e),
                    );
                }
                Outcome::sent(address, format!("Message sent successfully to: {}", address))
            }
            Err(e) => Outcome::failed(address, format!("{:#}", e)),
        }
    }
}
