use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::{NewsError, NewsResult};
use crate::models::Article;

#[async_trait]
pub trait NewsProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// False when the provider's credential is missing or a placeholder.
    fn is_configured(&self) -> bool;

    /// The provider is skipped once this many articles have been collected.
    fn budget(&self) -> usize;

    async fn fetch(&self) -> NewsResult<Vec<Article>>;
}

/// Runs providers one after another in priority order.
pub struct ProviderChain {
    providers: Vec<Box<dyn NewsProvider>>,
    timeout: Duration,
}

impl ProviderChain {
    pub fn new(timeout: Duration) -> Self {
        Self {
            providers: Vec::new(),
            timeout,
        }
    }

    pub fn add_provider(mut self, provider: Box<dyn NewsProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Name and budget of every provider, in the order they run.
    pub fn descriptors(&self) -> Vec<(&'static str, usize)> {
        self.providers
            .iter()
            .map(|p| (p.name(), p.budget()))
            .collect()
    }

    pub async fn collect(&self) -> Vec<Article> {
        let mut articles = Vec::new();

        for provider in &self.providers {
            let name = provider.name();
            if !provider.is_configured() {
                info!("{} is not configured; skipping", name);
                continue;
            }
            if articles.len() >= provider.budget() {
                info!(
                    "Already have {} articles (budget {}); skipping {}",
                    articles.len(),
                    provider.budget(),
                    name
                );
                continue;
            }

            articles.extend(self.try_provider(provider.as_ref()).await);
        }

        info!(
            "Provider chain finished with {} articles from {} providers",
            articles.len(),
            self.providers.len()
        );
        articles
    }

    /// Fetches from one provider, treating any failure as an empty result.
    pub async fn try_provider(&self, provider: &dyn NewsProvider) -> Vec<Article> {
        let name = provider.name();
        let result = match tokio::time::timeout(self.timeout, provider.fetch()).await {
            Ok(result) => result,
            Err(_) => Err(NewsError::Timeout(name, self.timeout)),
        };

        match result {
            Ok(articles) => {
                let articles: Vec<Article> = articles
                    .into_iter()
                    .filter(|a| !a.title.trim().is_empty())
                    .collect();
                info!("{} returned {} articles", name, articles.len());
                articles
            }
            Err(e) => {
                warn!("{} failed: {}", name, e);
                Vec::new()
            }
        }
    }
}
