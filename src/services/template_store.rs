//! services/template_store.rs
//! Template de correo en texto plano: línea 1 = subject, el resto = body.
//! El token (por defecto "name") se sustituye en la primera línea del body.

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};

const DEFAULT_TEMPLATE: &str = "Welcome to Our Service!\n\nDear name,\n\nThank you for your interest in our services. We're excited to have you on board!\n\nWe believe our solution will help you achieve your goals more efficiently. If you have any questions, please don't hesitate to reach out.\n\nBest regards,\nThe Support Team";

/// Template ya leído de disco, listo para personalizar.
#[derive(Debug, Clone)]
pub struct RawTemplate {
    lines: Vec<String>,
}

impl RawTemplate {
    pub fn parse(content: &str) -> Self {
        RawTemplate {
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    /// Sustituye la primera aparición del token en la primera línea del
    /// body y devuelve (subject, body).
    pub fn personalize(&self, token: &str, display_name: &str) -> (String, String) {
        let subject = self
            .lines
            .first()
            .map(|l| l.trim().to_string())
            .unwrap_or_else(|| "No Subject".to_string());

        let body = if self.lines.len() > 1 {
            let mut body_lines = self.lines[1..].to_vec();
            body_lines[0] = body_lines[0].replacen(token, display_name, 1);
            body_lines.join("\n")
        } else {
            // Template de una sola línea: el body repite esa línea
            self.lines.join("\n")
        };

        (subject, body)
    }
}

#[derive(Clone)]
pub struct TemplateStore {
    file_path: Arc<PathBuf>,
}

impl TemplateStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Arc::new(file_path.into()),
        }
    }

    /// Crea el template por defecto si todavía no existe.
    pub fn ensure_default(&self) -> Result<()> {
        if self.file_path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&*self.file_path, DEFAULT_TEMPLATE)
            .with_context(|| format!("No se pudo crear el template en {:?}", self.file_path))?;
        Ok(())
    }

    /// Contenido crudo, tal cual está en disco (para la página de edición).
    pub fn read_content(&self) -> Result<String> {
        fs::read_to_string(&*self.file_path)
            .with_context(|| format!("Error reading template file {:?}", self.file_path))
    }

    pub fn write_content(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&*self.file_path, content)
            .with_context(|| format!("No se pudo guardar el template en {:?}", self.file_path))?;
        Ok(())
    }

    /// Lee y parsea el template. El worker llama esto por cada envío
    /// cuando `reread_template_per_send` está activo.
    pub fn load_raw(&self) -> Result<RawTemplate> {
        Ok(RawTemplate::parse(&self.read_content()?))
    }
}
