pub mod enrich;
pub mod rating;
pub mod samples;
pub mod tags;

pub use enrich::Enricher;
pub use samples::sample_news;

use common::{Config, LanguageModel, NewsItem, NewsResult, ProviderChain};
use gnews::GNewsProvider;
use naver::NaverNewsProvider;
use newsapi::NewsApiProvider;
use openai::OpenAiClient;
use tracing::{info, warn};
use youtube::YouTubeProvider;

/// Upper bound on the number of items returned per request.
pub const MAX_ITEMS: usize = 10;

pub struct NewsPipeline {
    chain: ProviderChain,
    enricher: Enricher,
}

impl NewsPipeline {
    pub fn new(chain: ProviderChain, enricher: Enricher) -> Self {
        Self { chain, enricher }
    }

    /// Wires the providers in priority order: GNews, NewsAPI, Naver, YouTube.
    pub fn from_config(config: &Config) -> NewsResult<Self> {
        let chain = ProviderChain::new(config.request_timeout)
            .add_provider(Box::new(GNewsProvider::new(config)?))
            .add_provider(Box::new(NewsApiProvider::new(config)?))
            .add_provider(Box::new(NaverNewsProvider::new(config)?))
            .add_provider(Box::new(YouTubeProvider::new(config)?));
        for (name, budget) in chain.descriptors() {
            info!("Provider {} registered with budget {}", name, budget);
        }

        let model: Box<dyn LanguageModel> = Box::new(OpenAiClient::new(config)?);
        Ok(Self::new(chain, Enricher::new(Some(model))))
    }

    /// Name and budget of each provider in the order they are tried.
    pub fn providers(&self) -> Vec<(&'static str, usize)> {
        self.chain.descriptors()
    }

    pub async fn fetch_news(&self) -> Vec<NewsItem> {
        let mut articles = self.chain.collect().await;

        if articles.is_empty() {
            warn!("No provider returned articles; serving sample news");
            let mut samples = sample_news();
            samples.truncate(MAX_ITEMS);
            return samples;
        }

        articles.truncate(MAX_ITEMS);

        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            items.push(self.enricher.enrich(article).await);
        }

        info!("Serving {} news items", items.len());
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use common::{Article, NewsError, NewsProvider};
    use crate::rating::is_valid_rating;
    use std::time::Duration;

    struct StaticProvider {
        name: &'static str,
        articles: Vec<Article>,
        budget: usize,
    }

    #[async_trait]
    impl NewsProvider for StaticProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn budget(&self) -> usize {
            self.budget
        }

        async fn fetch(&self) -> NewsResult<Vec<Article>> {
            Ok(self.articles.clone())
        }
    }

    struct DownProvider;

    #[async_trait]
    impl NewsProvider for DownProvider {
        fn name(&self) -> &'static str {
            "down"
        }

        fn is_configured(&self) -> bool {
            true
        }

        fn budget(&self) -> usize {
            5
        }

        async fn fetch(&self) -> NewsResult<Vec<Article>> {
            Err(NewsError::Api("503 Service Unavailable".to_string()))
        }
    }

    fn headlines(prefix: &str, count: usize) -> Vec<Article> {
        (0..count)
            .map(|i| Article {
                title: format!("{} 헤드라인 {}", prefix, i),
                description: "x".repeat(i * 15),
                source: prefix.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_providers_run_in_priority_order() {
        let pipeline = NewsPipeline::from_config(&Config::default()).unwrap();
        assert_eq!(
            pipeline.providers(),
            vec![("GNews", 5), ("NewsAPI", 5), ("Naver", 5), ("YouTube", 8)]
        );
    }

    #[tokio::test]
    async fn test_no_credentials_serves_samples() {
        let pipeline = NewsPipeline::from_config(&Config::default()).unwrap();
        assert_eq!(pipeline.fetch_news().await, sample_news());
    }

    #[tokio::test]
    async fn test_all_providers_failing_serves_samples() {
        let chain = ProviderChain::new(Duration::from_secs(1)).add_provider(Box::new(DownProvider));
        let pipeline = NewsPipeline::new(chain, Enricher::offline());
        assert_eq!(pipeline.fetch_news().await, sample_news());
    }

    #[tokio::test]
    async fn test_output_is_capped_rated_and_tagged() {
        let chain = ProviderChain::new(Duration::from_secs(1))
            .add_provider(Box::new(StaticProvider {
                name: "wire",
                articles: headlines("wire", 3),
                budget: 5,
            }))
            .add_provider(Box::new(DownProvider))
            .add_provider(Box::new(StaticProvider {
                name: "video",
                articles: headlines("video", 12),
                budget: 8,
            }));
        let pipeline = NewsPipeline::new(chain, Enricher::offline());

        let items = pipeline.fetch_news().await;
        assert_eq!(items.len(), MAX_ITEMS);
        assert_eq!(items[0].source, "wire");
        assert_eq!(items[3].source, "video");
        for item in &items {
            assert!(is_valid_rating(item.rating), "bad rating {}", item.rating);
            assert!(!item.tags.is_empty());
        }
    }

    #[tokio::test]
    async fn test_rates_live_items() {
        let chain = ProviderChain::new(Duration::from_secs(1)).add_provider(Box::new(StaticProvider {
            name: "naver",
            articles: vec![
                Article {
                    title: "가나다라마바사아자차카".to_string(),
                    description: "x".repeat(60),
                    ..Default::default()
                },
                Article {
                    title: "경제 소식".to_string(),
                    description: "짧은 설명".to_string(),
                    ..Default::default()
                },
            ],
            budget: 5,
        }));
        let pipeline = NewsPipeline::new(chain, Enricher::offline());

        let items = pipeline.fetch_news().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].rating, 4.0);
        assert_eq!(items[0].tags, vec!["일반"]);
        assert_eq!(items[1].rating, 3.5);
        assert!(items[1].tags.contains(&"경제".to_string()));
    }
}
