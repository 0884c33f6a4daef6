use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{NewsError, NewsResult};

const USER_AGENT: &str = "Mozilla/5.0 (compatible; news-aggregator/0.1)";

/// Error bodies are cut to this many characters before they reach logs.
const MAX_ERROR_BODY_CHARS: usize = 300;

/// Builds a client whose every request is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> NewsResult<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(NewsError::HttpRequest)
}

/// Sends `request` and decodes a JSON body, turning non-2xx responses into
/// [`NewsError::Status`].
pub async fn send_json<T: DeserializeOwned>(
    provider: &'static str,
    request: RequestBuilder,
) -> NewsResult<T> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(NewsError::Status {
            provider,
            status,
            body: error_excerpt(&body),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| NewsError::Parse(format!("{} returned malformed JSON: {}", provider, e)))
}

fn error_excerpt(body: &str) -> String {
    let body = body.trim();
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let mut excerpt: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_error_body_is_kept() {
        assert_eq!(error_excerpt("  {\"message\":\"rate limited\"}\n"), "{\"message\":\"rate limited\"}");
    }

    #[test]
    fn test_html_error_page_is_cut() {
        let page = format!("<html><body>{}</body></html>", "오류 ".repeat(500));
        let excerpt = error_excerpt(&page);
        assert_eq!(excerpt.chars().count(), MAX_ERROR_BODY_CHARS + 3);
        assert!(excerpt.starts_with("<html><body>"));
        assert!(excerpt.ends_with("..."));
    }
}
