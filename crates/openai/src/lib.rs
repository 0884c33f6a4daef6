pub mod models;

use async_trait::async_trait;
use common::{http, Config, LanguageModel, NewsError, NewsResult};
use models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use reqwest::Client;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const TRANSLATE_PROMPT: &str = "You translate news headlines into natural Korean. \
    Reply with the translated headline only, without quotes or explanations.";
const SUMMARIZE_PROMPT: &str = "다음 뉴스 내용을 한국어로 2문장 이내로 요약하세요. \
    요약문만 답하세요.";

pub struct OpenAiClient {
    http_client: Client,
    api_key: Option<String>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> NewsResult<Self> {
        Ok(Self {
            http_client: http::build_client(config.request_timeout)?,
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        })
    }

    async fn complete(&self, instructions: &str, text: &str, max_tokens: u32) -> NewsResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(NewsError::MissingCredential("OpenAI"))?;

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: instructions,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: 0.3,
            max_tokens,
        };

        let request = self
            .http_client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&body);

        let resp: ChatCompletionResponse = http::send_json(self.name(), request).await?;
        resp.first_content()
            .ok_or_else(|| NewsError::Api("OpenAI returned an empty completion".to_string()))
    }
}

#[async_trait]
impl LanguageModel for OpenAiClient {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn translate(&self, text: &str) -> NewsResult<String> {
        self.complete(TRANSLATE_PROMPT, text, 100).await
    }

    async fn summarize(&self, text: &str) -> NewsResult<String> {
        self.complete(SUMMARIZE_PROMPT, text, 200).await
    }
}
