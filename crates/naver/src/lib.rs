pub mod models;

use async_trait::async_trait;
use common::{http, Article, Config, NaverCredentials, NewsError, NewsProvider, NewsResult};
use models::NaverSearchResponse;
use scraper::Html;
use tracing::info;

const NAVER_NEWS_SEARCH_URL: &str = "https://openapi.naver.com/v1/search/news.json";
const DISPLAY: usize = 10;
const SOURCE_LABEL: &str = "네이버 뉴스";

pub struct NaverNewsProvider {
    client: reqwest::Client,
    credentials: Option<NaverCredentials>,
    query: String,
}

impl NaverNewsProvider {
    pub fn new(config: &Config) -> NewsResult<Self> {
        Ok(Self {
            client: http::build_client(config.request_timeout)?,
            credentials: config.naver.clone(),
            query: config.query.clone(),
        })
    }

    /// Search results wrap matches in `<b>` and escape quotes as entities.
    fn clean_html(html: &str) -> String {
        Html::parse_fragment(html)
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join("")
            .trim()
            .to_string()
    }

    fn to_articles(response: NaverSearchResponse) -> Vec<Article> {
        response
            .items
            .into_iter()
            .map(|item| Article {
                title: Self::clean_html(&item.title.unwrap_or_default()),
                description: Self::clean_html(&item.description.unwrap_or_default()),
                url: item
                    .originallink
                    .filter(|link| !link.is_empty())
                    .or(item.link)
                    .unwrap_or_default(),
                image: String::new(),
                published_at: item.pub_date.unwrap_or_default(),
                source: SOURCE_LABEL.to_string(),
                translate: false,
            })
            .collect()
    }
}

#[async_trait]
impl NewsProvider for NaverNewsProvider {
    fn name(&self) -> &'static str {
        "Naver"
    }

    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn budget(&self) -> usize {
        5
    }

    async fn fetch(&self) -> NewsResult<Vec<Article>> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(NewsError::MissingCredential("Naver"))?;

        info!("Searching Naver news for '{}'", self.query);
        let display = DISPLAY.to_string();
        let request = self
            .client
            .get(NAVER_NEWS_SEARCH_URL)
            .header("X-Naver-Client-Id", &credentials.client_id)
            .header("X-Naver-Client-Secret", &credentials.client_secret)
            .query(&[
                ("query", self.query.as_str()),
                ("display", display.as_str()),
                ("sort", "date"),
            ]);

        let response: NaverSearchResponse = http::send_json(self.name(), request).await?;
        Ok(Self::to_articles(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_html() {
        assert_eq!(
            NaverNewsProvider::clean_html("<b>AI</b> 반도체 &quot;호황&quot;"),
            "AI 반도체 \"호황\""
        );
        assert_eq!(NaverNewsProvider::clean_html("plain"), "plain");
        assert_eq!(NaverNewsProvider::clean_html(""), "");
    }

    #[test]
    fn test_maps_naver_items() {
        let body = r#"{
            "lastBuildDate": "Mon, 06 May 2024 10:00:00 +0900",
            "total": 2,
            "start": 1,
            "display": 2,
            "items": [
                {
                    "title": "<b>AI</b> 스타트업 투자 확대",
                    "originallink": "https://news.example.kr/1",
                    "link": "https://n.news.naver.com/1",
                    "description": "국내 <b>AI</b> 기업들이 &amp; 투자를 늘렸다.",
                    "pubDate": "Mon, 06 May 2024 09:30:00 +0900"
                },
                {
                    "title": "링크만 있는 기사",
                    "originallink": "",
                    "link": "https://n.news.naver.com/2"
                }
            ]
        }"#;

        let response: NaverSearchResponse = serde_json::from_str(body).unwrap();
        let articles = NaverNewsProvider::to_articles(response);

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "AI 스타트업 투자 확대");
        assert_eq!(articles[0].description, "국내 AI 기업들이 & 투자를 늘렸다.");
        assert_eq!(articles[0].url, "https://news.example.kr/1");
        assert_eq!(articles[0].published_at, "Mon, 06 May 2024 09:30:00 +0900");
        assert_eq!(articles[0].source, "네이버 뉴스");
        assert_eq!(articles[0].image, "");
        assert!(!articles[0].translate);

        assert_eq!(articles[1].url, "https://n.news.naver.com/2");
        assert_eq!(articles[1].description, "");
    }
}
