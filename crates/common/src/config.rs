use std::env;
use std::str::FromStr;
use std::time::Duration;
use anyhow::Result;

/// Credential prefixes that ship in sample `.env` files and never work.
const PLACEHOLDER_PREFIXES: [&str; 2] = ["your_", "sk-placeholder"];

/// Returns true when a credential value is absent in practice: empty, or a
/// known placeholder such as `your_api_key` or `sk-placeholder-...`.
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    value.is_empty()
        || PLACEHOLDER_PREFIXES
            .iter()
            .any(|prefix| value.starts_with(prefix))
}

/// Parses `raw`, falling back to `default` when it is missing or malformed.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

fn credential(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !is_placeholder(v))
}

#[derive(Debug, Clone)]
pub struct NaverCredentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            static_dir: "public".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gnews_api_key: Option<String>,
    pub news_api_key: Option<String>,
    pub naver: Option<NaverCredentials>,
    pub youtube_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub query: String,
    pub request_timeout: Duration,
    pub server: ServerConfig,
}

impl Default for Config {
    /// A config with every provider disabled.
    fn default() -> Self {
        Self {
            gnews_api_key: None,
            news_api_key: None,
            naver: None,
            youtube_api_key: None,
            openai_api_key: None,
            openai_model: "gpt-3.5-turbo".to_string(),
            query: "AI".to_string(),
            request_timeout: Duration::from_secs(10),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Config::default();

        // Naver needs both halves of the credential pair.
        let naver = match (credential("NAVER_CLIENT_ID"), credential("NAVER_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret)) => Some(NaverCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        let request_timeout = Duration::from_secs(parse_or(
            env::var("REQUEST_TIMEOUT_SECS").ok(),
            defaults.request_timeout.as_secs(),
        ));

        let port = parse_or(env::var("PORT").ok(), defaults.server.port);

        let server = ServerConfig {
            port,
            static_dir: env::var("STATIC_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.server.static_dir),
        };

        Ok(Config {
            gnews_api_key: credential("GNEWS_API_KEY"),
            news_api_key: credential("NEWS_API_KEY"),
            naver,
            youtube_api_key: credential("YOUTUBE_API_KEY"),
            openai_api_key: credential("OPENAI_API_KEY"),
            openai_model: env::var("OPENAI_MODEL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.openai_model),
            query: env::var("NEWS_QUERY")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.query),
            request_timeout,
            server,
        })
    }
}
