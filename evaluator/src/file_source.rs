
use std::future::Future;
use std::path::{Path, PathBuf};

use crate::error::ReadFailure;

/// Binary content plus the metadata the evaluation service wants to see.
///
/// `read` consumes the source, so every source is read at most once.
/// `Ok(None)` means the read finished but produced nothing.
pub trait FileSource {
    fn name(&self) -> &str;
    fn mime_type(&self) -> Option<&str>;
    fn read(self) -> impl Future<Output = Result<Option<Vec<u8>>, ReadFailure>> + Send;
}

pub struct MemoryFile {
    name: String,
    mime_type: Option<String>,
    data: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, mime_type: Option<&str>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.map(Into::into),
            data: data.into(),
        }
    }
}

impl FileSource for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    async fn read(self) -> Result<Option<Vec<u8>>, ReadFailure> {
        Ok(Some(self.data))
    }
}

pub struct DiskFile {
    path: PathBuf,
    name: String,
    mime_type: Option<String>,
}

impl DiskFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        // paths like ".." or "/" have no file name
        let name = path.file_name()
            .map(|v| v.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_guess::from_path(&path)
            .first()
            .map(|v| v.essence_str().to_owned());
        Self {
            path,
            name,
            mime_type,
        }
    }
}

impl FileSource for DiskFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    async fn read(self) -> Result<Option<Vec<u8>>, ReadFailure> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(Some(data))
    }
}
