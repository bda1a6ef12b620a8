//! services/recipient_store.rs
//! Persistencia de destinatarios como array JSON en disco.
//! El engine la lee en puntos bien definidos (count en el start,
//! snapshot completo al arrancar el worker).

use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};

use crate::models::recipient_model::Recipient;

#[derive(Clone)]
pub struct RecipientStore {
    file_path: Arc<PathBuf>,
}

impl RecipientStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Arc::new(file_path.into()),
        }
    }

    /// Carga el snapshot completo, en el orden del archivo.
    /// Un error aquí dentro del worker es fatal para el run.
    pub fn load(&self) -> Result<Vec<Recipient>> {
        let raw = fs::read_to_string(&*self.file_path)
            .with_context(|| format!("No se pudo leer {:?}", self.file_path))?;
        let recipients: Vec<Recipient> =
            serde_json::from_str(&raw).context("El archivo de recipients no es un JSON válido")?;
        Ok(recipients)
    }

    /// Cuenta las entradas con dirección no vacía. Cualquier problema de
    /// lectura cuenta como 0 (la precondición NoData lo rechaza después).
    pub fn count_addressable(&self) -> usize {
        match self.load() {
            Ok(recipients) => recipients.iter().filter(|r| r.has_address()).count(),
            Err(_) => 0,
        }
    }

    /// Reemplaza el archivo completo.
    pub fn replace(&self, recipients: &[Recipient]) -> Result<()> {
        let json = serde_json::to_string_pretty(recipients)?;
        fs::write(&*self.file_path, json)
            .with_context(|| format!("No se pudo escribir {:?}", self.file_path))?;
        Ok(())
    }

    /// Importa filas CSV estilo planilla: se salta la fila de headers,
    /// toma display_name de la columna 2 y address de la columna 5, y
    /// descarta filas cuya dirección no contenga '@'.
    pub fn import_csv(&self, csv_text: &str) -> Result<usize> {
        const DISPLAY_NAME_COLUMN: usize = 2;
        const ADDRESS_COLUMN: usize = 5;

        let mut extracted = Vec::new();
        for line in csv_text.lines().skip(1) {
            let cells: Vec<&str> = line.split(',').map(str::trim).collect();
            if cells.len() < ADDRESS_COLUMN.max(DISPLAY_NAME_COLUMN) {
                continue;
            }

            let display_name = cells[DISPLAY_NAME_COLUMN - 1];
            let address = cells[ADDRESS_COLUMN - 1];
            if address.is_empty() || !address.contains('@') {
                continue;
            }

            extracted.push(Recipient {
                address: address.to_string(),
                display_name: if display_name.is_empty() {
                    None
                } else {
                    Some(display_name.to_string())
                },
            });
        }

        self.replace(&extracted)?;
        Ok(extracted.len())
    }
}
