use crate::scrapers::traits::MarkupSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Markup saved to a local file
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MarkupSource for FileSource {
    async fn read_markup(&self) -> Result<String> {
        let markup = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read markup from {}", self.path.display()))?;
        debug!("Read {} bytes from {}", markup.len(), self.path.display());
        Ok(markup)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}

/// Markup piped or pasted on standard input
#[derive(Default)]
pub struct StdinSource;

#[async_trait]
impl MarkupSource for StdinSource {
    async fn read_markup(&self) -> Result<String> {
        let mut markup = String::new();
        tokio::io::stdin()
            .read_to_string(&mut markup)
            .await
            .context("Failed to read markup from stdin")?;
        debug!("Read {} bytes from stdin", markup.len());
        Ok(markup)
    }

    fn source_name(&self) -> &'static str {
        "stdin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_markup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<div class=\"D_vj D_pt\"></div>").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.source_name(), "file");
        assert_eq!(
            source.read_markup().await.unwrap(),
            "<div class=\"D_vj D_pt\"></div>"
        );
    }

    #[tokio::test]
    async fn test_file_source_missing_file() {
        let source = FileSource::new("/no/such/listing.html");
        let err = source.read_markup().await.unwrap_err();
        assert!(err.to_string().contains("/no/such/listing.html"));
    }
}
