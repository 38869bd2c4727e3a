use anyhow::Result;
use async_trait::async_trait;

/// Where pasted marketplace markup comes from
#[async_trait]
pub trait MarkupSource: Send + Sync {
    /// Read the whole markup document
    async fn read_markup(&self) -> Result<String>;

    /// Short label for logs
    fn source_name(&self) -> &'static str;
}
