//! services/attachment_store.rs
//! Directorio plano de adjuntos. El worker toma un snapshot de rutas
//! una sola vez al arrancar el run.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{anyhow, Context, Result};

#[derive(Clone)]
pub struct AttachmentStore {
    dir: Arc<PathBuf>,
}

impl AttachmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Arc::new(dir.into()),
        }
    }

    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&*self.dir)
            .with_context(|| format!("No se pudo crear el directorio {:?}", self.dir))?;
        Ok(())
    }

    /// Nombres de archivo (solo archivos regulares), orden estable.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(&*self.dir) {
            Ok(entries) => entries
                .flatten()
                .filter(|e| e.path().is_file())
                .filter_map(|e| e.file_name().into_string().ok())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    /// Rutas completas de todos los adjuntos actuales.
    pub fn snapshot_paths(&self) -> Vec<PathBuf> {
        self.list()
            .into_iter()
            .map(|name| self.dir.join(name))
            .collect()
    }

    pub fn save(&self, filename: &str, data: &[u8]) -> Result<()> {
        let name = sanitize_filename(filename)?;
        self.ensure_dir()?;
        let path = self.dir.join(name);
        fs::write(&path, data)
            .with_context(|| format!("No se pudo guardar el adjunto en {:?}", path))?;
        Ok(())
    }

    /// Ok(false) si el archivo no existía.
    pub fn delete(&self, filename: &str) -> Result<bool> {
        let name = sanitize_filename(filename)?;
        let path = self.dir.join(name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("No se pudo borrar {:?}", path))?;
        Ok(true)
    }
}

/// Rechaza separadores y ".." para que el nombre no escape del directorio.
fn sanitize_filename(filename: &str) -> Result<&str> {
    let name = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Nombre de archivo inválido: {}", filename))?;
    if name != filename || name == ".." {
        return Err(anyhow!("Nombre de archivo inválido: {}", filename));
    }
    Ok(name)
}
