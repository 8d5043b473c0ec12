
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as Base64;
use tracing::debug;

use crate::error::ReadFailure;
use crate::file_source::FileSource;

// only used to build the data url; the prefix is stripped again
const UNKNOWN_MIME_TYPE: &str = "application/octet-stream";

#[derive(Default, Clone, Copy)]
pub struct FileEncoder {}

impl FileEncoder {
    pub fn new() -> Self {
        Self {}
    }

    /// Reads `file` once and returns its content as standard base64, without
    /// the `data:<mime>;base64,` prefix.
    pub async fn encode<F: FileSource>(&self, file: F) -> Result<String, ReadFailure> {
        let mime_type = file.mime_type()
            .filter(|v| !v.is_empty())
            .unwrap_or(UNKNOWN_MIME_TYPE)
            .to_owned();
        let name = file.name().to_owned();
        // a read that yields nothing encodes to an empty string instead of an error
        let Some(data) = file.read().await? else { return Ok(String::new()) };
        debug!("encoding {} ({} bytes)", name, data.len());
        let data_url = self.data_url(&mime_type, &data);
        Ok(payload_of(&data_url).to_owned())
    }

    pub fn base64(&self, data: &[u8]) -> String {
        Base64.encode(data)
    }

    pub fn data_url(&self, mime_type: &str, data: &[u8]) -> String {
        let data_base64 = self.base64(data);
        format!("data:{mime_type};base64,{data_base64}")
    }
}

// everything after the first comma, or "" when there is none
pub fn payload_of(data_url: &str) -> &str {
    data_url.split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or_default()
}
