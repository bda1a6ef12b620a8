//! models/progress_model.rs
//! Estado en memoria del run de envío (el "Job" singleton).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Idle,
    Sending,
    Completed,
    Error,
}

/// Resultado de un intento de envío a un destinatario.
/// Se agrega en orden de procesamiento y nunca se muta después.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outcome {
    pub recipient_address: String,
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn sent(address: &str, message: String) -> Self {
        Outcome {
            recipient_address: address.to_string(),
            success: true,
            message,
        }
    }

    pub fn failed(address: &str, message: String) -> Self {
        Outcome {
            recipient_address: address.to_string(),
            success: false,
            message,
        }
    }
}

/// Progreso del run actual (o del último). Existe exactamente uno,
/// detrás de un Mutex; el worker es el único escritor.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobProgress {
    pub current: usize,
    pub total: usize,
    pub status: JobStatus,
    pub results: Vec<Outcome>,
}

impl JobProgress {
    pub fn idle() -> Self {
        JobProgress {
            current: 0,
            total: 0,
            status: JobStatus::Idle,
            results: Vec::new(),
        }
    }
}
