use std::path::{Component, Path, PathBuf};

use actix_multipart::form::tempfile::TempFile;
use chrono::{DateTime, Utc};
use tokio::fs;
use tracing::info;

use crate::errors::UploadError;

/// Filesystem directory holding uploaded files.
///
/// Stored names follow `<field>-<unix millis><.ext>`, so two uploads of the
/// same field within one millisecond collide and the later one wins.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        UploadStore { dir: dir.into() }
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(UploadError::CreateDir)
    }

    /// Persists an optional multipart file and returns the stored name.
    /// The directory is created even when no file was sent.
    pub async fn store(
        &self,
        field: &str,
        file: Option<TempFile>
    ) -> Result<Option<String>, UploadError> {
        self.ensure_dir().await?;

        let Some(file) = file else {
            return Ok(None);
        };

        let stored = self
            .store_from_path(field, file.file_name.as_deref(), file.file.path())
            .await?;

        Ok(Some(stored))
    }

    /// Copies `source` into the upload directory under a generated name.
    async fn store_from_path(
        &self,
        field: &str,
        original_name: Option<&str>,
        source: &Path
    ) -> Result<String, UploadError> {
        let file_name = generate_file_name(field, original_name, Utc::now());
        let destination = self.dir.join(&file_name);

        let bytes = fs::copy(source, &destination)
            .await
            .map_err(UploadError::Write)?;

        info!(file = %file_name, bytes, "Stored uploaded file");
        Ok(file_name)
    }

    /// Maps a public file name to a path inside the upload directory.
    /// Anything other than a single plain path segment is refused.
    pub fn resolve(&self, file_name: &str) -> Option<PathBuf> {
        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if !file_name.contains('\\') => {
                Some(self.dir.join(name))
            }
            _ => None,
        }
    }
}

/// Builds `<field>-<millis><.ext>`, taking the extension from the client's filename.
pub fn generate_file_name(field: &str, original_name: Option<&str>, now: DateTime<Utc>) -> String {
    let extension = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default();

    format!("{}-{}{}", field, now.timestamp_millis(), extension)
}
