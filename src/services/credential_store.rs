//! services/credential_store.rs
//! Credenciales SMTP en texto plano `usuario:password`, una sola línea.

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

#[derive(Clone)]
pub struct CredentialStore {
    file_path: Arc<PathBuf>,
}

impl CredentialStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Arc::new(file_path.into()),
        }
    }

    /// Devuelve las credenciales guardadas, o None si el archivo no
    /// existe o no tiene el formato `usuario:password`.
    pub fn load(&self) -> Option<Credential> {
        let raw = fs::read_to_string(&*self.file_path).ok()?;
        let line = raw.lines().next()?.trim();
        let (username, password) = line.split_once(':')?;
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Credential {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Solo el usuario, para mostrar "logged in as".
    pub fn current_user(&self) -> Option<String> {
        self.load().map(|c| c.username)
    }

    pub fn save(&self, username: &str, password: &str) -> Result<()> {
        fs::write(&*self.file_path, format!("{}:{}\n", username, password))
            .with_context(|| format!("No se pudo guardar credenciales en {:?}", self.file_path))?;
        Ok(())
    }

    /// Borra el archivo. Ok(false) si no había nada que borrar.
    pub fn remove(&self) -> Result<bool> {
        if !self.file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&*self.file_path)
            .with_context(|| format!("No se pudo borrar {:?}", self.file_path))?;
        Ok(true)
    }
}
