//! models/attachment_model.rs

use serde::{Deserialize, Serialize};

/// Adjunto subido por la API. El contenido viaja en base64 dentro
/// del JSON y se persiste como archivo plano en el directorio de adjuntos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadAttachmentRequest {
    pub filename: String,
    #[serde(
        serialize_with = "serialize_base64",
        deserialize_with = "deserialize_base64"
    )]
    pub data: Vec<u8>,
}

fn serialize_base64<S>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&base64::encode(data))
}

fn deserialize_base64<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    base64::decode(&s).map_err(serde::de::Error::custom)
}
