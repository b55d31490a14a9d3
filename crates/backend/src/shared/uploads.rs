use super::multipart_form::UploadedFile;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// URL prefix under which stored uploads are served
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Directory where files posted through create dialogs are kept.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_file_size: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_file_size: usize) -> Self {
        Self {
            dir: dir.into(),
            max_file_size,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Writes the file under a generated name and returns that name.
    ///
    /// Only the (sanitized) extension of the client file name survives.
    pub async fn save(&self, file: &UploadedFile) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let stored_name = match extension_of(&file.file_name) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        tokio::fs::write(self.dir.join(&stored_name), &file.bytes).await?;
        tracing::info!(
            "Stored upload {} ({} bytes) as {}",
            file.file_name,
            file.len(),
            stored_name
        );
        Ok(stored_name)
    }

    /// Deletes a stored upload whose record was never written.
    pub async fn remove(&self, stored_name: &str) -> std::io::Result<()> {
        tokio::fs::remove_file(self.dir.join(stored_name)).await?;
        tracing::info!("Removed upload {}", stored_name);
        Ok(())
    }

    pub fn public_url(stored_name: &str) -> String {
        format!("{}/{}", UPLOADS_ROUTE, stored_name)
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    if ext.is_empty() || ext.len() > 8 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;

    #[test]
    fn test_extension_is_sanitized() {
        assert_eq!(extension_of("Logo.PNG").as_deref(), Some("png"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("noext"), None);
        assert_eq!(extension_of("evil.p/h"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[tokio::test]
    async fn test_save_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("uploads"), 1024);
        let file = UploadedFile {
            file_name: "logo.png".into(),
            content_type: Some("image/png".into()),
            bytes: Bytes::from_static(b"\x89PNG"),
        };

        let stored = store.save(&file).await.unwrap();
        assert!(stored.ends_with(".png"));
        let written = std::fs::read(store.dir().join(&stored)).unwrap();
        assert_eq!(written, b"\x89PNG");
        assert_eq!(UploadStore::public_url(&stored), format!("/uploads/{stored}"));

        store.remove(&stored).await.unwrap();
        assert!(!store.dir().join(&stored).exists());
        assert!(store.remove(&stored).await.is_err());
    }
}
