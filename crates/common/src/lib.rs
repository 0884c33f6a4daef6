pub mod config;
pub mod error;
pub mod http;
pub mod language_model;
pub mod models;
pub mod provider;

pub use config::{is_placeholder, Config, NaverCredentials, ServerConfig};
pub use error::{NewsError, NewsResult};
pub use language_model::LanguageModel;
pub use models::{Article, NewsItem};
pub use provider::{NewsProvider, ProviderChain};
