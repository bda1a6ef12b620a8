//! services/send_log.rs
//! Log durable de envíos exitosos, append-only, una línea por envío:
//! `<address> > done > <timestamp local>`. Nunca se reescribe ni compacta.
//! Los fallos quedan solo en los Outcomes en memoria.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use chrono::Local;

/// Formato con marcador AM/PM al final (hora en 24h, igual que el
/// log histórico; los archivos existentes deben seguir siendo válidos).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %p";

#[derive(Clone)]
pub struct SendLog {
    file_path: Arc<PathBuf>,
}

impl SendLog {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Arc::new(file_path.into()),
        }
    }

    /// Registra un envío exitoso. Se abre en modo append por escritura;
    /// solo existe un worker, así que no hay escritores concurrentes.
    pub fn append(&self, address: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&*self.file_path)
            .with_context(|| format!("No se pudo abrir el log {:?}", self.file_path))?;

        writeln!(
            file,
            "{} > done > {}",
            address,
            Local::now().format(TIMESTAMP_FORMAT)
        )
        .context("No se pudo escribir en el log de envíos")?;
        Ok(())
    }

    /// Contenido completo del log ("" si todavía no existe).
    pub fn read_all(&self) -> String {
        fs::read_to_string(&*self.file_path).unwrap_or_default()
    }
}
