use async_trait::async_trait;

use crate::error::NewsResult;

/// A text model able to translate headlines and summarize articles into Korean.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &'static str;

    fn is_configured(&self) -> bool;

    async fn translate(&self, text: &str) -> NewsResult<String>;

    async fn summarize(&self, text: &str) -> NewsResult<String>;
}
