use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::{ChatClient, ChatClientFactory};
use crate::domain::{build_messages, ChatMessage, ClientError, GenerationParams};

/// Default target: the DeepSeek cloud API, which speaks the OpenAI dialect.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";
const COMPLETIONS_PATH: &str = "/chat/completions";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI chat-completions request payload. Unset parameters are skipped,
/// never serialized as `null`.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
}

impl<'a> ApiRequest<'a> {
    fn new(
        model: &'a str,
        messages: &'a [ChatMessage],
        params: Option<&'a GenerationParams>,
    ) -> Self {
        Self {
            model,
            messages,
            max_tokens: params.and_then(|p| p.max_tokens()),
            stop: params.and_then(|p| p.stop()),
            temperature: params.and_then(|p| p.temperature()),
            top_p: params.and_then(|p| p.top_p()),
            top_k: params.and_then(|p| p.top_k()),
            frequency_penalty: params.and_then(|p| p.frequency_penalty()),
            presence_penalty: params.and_then(|p| p.presence_penalty()),
            seed: params.and_then(|p| p.seed()),
        }
    }
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ApiResponse {
    fn into_reply(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
    }
}

/// HTTP client for OpenAI-compatible chat-completions endpoints (DeepSeek by
/// default).
///
/// Each instance is bound to one API key. The underlying `reqwest::Client` is
/// shared with every other client built by the same
/// [`OpenAiChatClientFactory`], so connections may be reused across calls.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiChatClient {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Result<Self, ClientError> {
        Ok(Self::with_http_client(
            build_http_client()?,
            api_key,
            base_url,
        ))
    }

    fn with_http_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: &str,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            url: completions_url(base_url),
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn send(
        &self,
        prompt: &str,
        model: &str,
        params: Option<&GenerationParams>,
    ) -> Result<String, ClientError> {
        let messages = build_messages(prompt, params);
        let request = ApiRequest::new(model, &messages, params);

        debug!(
            "POST {} model={} messages={} params={}",
            self.url,
            model,
            messages.len(),
            params.map(|p| !p.is_empty()).unwrap_or(false)
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ClientError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(ClientError::transport)?;

        if !status.is_success() {
            warn!("OpenAiChatClient: API returned {status}: {body}");
            return Err(ClientError::http(status.as_u16(), body));
        }

        let api_response: ApiResponse =
            serde_json::from_str(&body).map_err(ClientError::transport)?;

        let reply = api_response.into_reply().ok_or(ClientError::EmptyReply)?;
        debug!("OpenAiChatClient reply: {reply}");
        Ok(reply)
    }
}

/// Builds [`OpenAiChatClient`]s that share one connection pool.
pub struct OpenAiChatClientFactory {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiChatClientFactory {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_http_client()?,
            base_url: base_url.into(),
        })
    }
}

impl ChatClientFactory for OpenAiChatClientFactory {
    fn create(&self, api_key: &str) -> Result<Arc<dyn ChatClient>, ClientError> {
        Ok(Arc::new(OpenAiChatClient::with_http_client(
            self.client.clone(),
            api_key,
            &self.base_url,
        )))
    }
}

fn build_http_client() -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(ClientError::transport)
}

fn completions_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn serialize(params: Option<&GenerationParams>) -> Value {
        let messages = build_messages("hi", params);
        serde_json::to_value(ApiRequest::new("deepseek-chat", &messages, params)).unwrap()
    }

    #[test]
    fn absent_params_produce_only_model_and_messages() {
        for params in [None, Some(GenerationParams::new())] {
            let body = serialize(params.as_ref());
            let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
            assert_eq!(keys.len(), 2, "unexpected keys: {keys:?}");
            assert!(body.get("model").is_some());
            assert!(body.get("messages").is_some());
        }
    }

    #[test]
    fn present_params_map_to_provider_fields() {
        let params = GenerationParams::new()
            .with_max_tokens(50)
            .with_stop(vec!["[END]".to_string()])
            .with_temperature(0.0)
            .with_top_p(0.9)
            .with_top_k(40)
            .with_frequency_penalty(0.5)
            .with_presence_penalty(-0.5)
            .with_seed(7)
            .with_format_instruction("Be terse.");

        let body = serialize(Some(&params));
        assert_eq!(body["max_tokens"], json!(50));
        assert_eq!(body["stop"], json!(["[END]"]));
        assert_eq!(body["temperature"], json!(0.0));
        assert_eq!(body["top_p"], json!(0.9));
        assert_eq!(body["top_k"], json!(40));
        assert_eq!(body["frequency_penalty"], json!(0.5));
        assert_eq!(body["presence_penalty"], json!(-0.5));
        assert_eq!(body["seed"], json!(7));
        assert!(body.get("format_instruction").is_none());
        assert_eq!(
            body["messages"],
            json!([
                {"role": "system", "content": "Be terse."},
                {"role": "user", "content": "hi"}
            ])
        );
    }

    #[test]
    fn reply_is_first_choice_content() {
        let response: ApiResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "X"}},
                {"message": {"role": "assistant", "content": "Y"}}
            ]
        }))
        .unwrap();
        assert_eq!(response.into_reply().as_deref(), Some("X"));
    }

    #[test]
    fn missing_content_yields_no_reply() {
        for value in [
            json!({"choices": []}),
            json!({}),
            json!({"choices": [{"message": {"content": null}}]}),
            json!({"choices": [{"finish_reason": "length"}]}),
        ] {
            let response: ApiResponse = serde_json::from_value(value).unwrap();
            assert!(response.into_reply().is_none());
        }
    }

    #[test]
    fn present_empty_content_is_returned_as_is() {
        let response: ApiResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": ""}}]})).unwrap();
        assert_eq!(response.into_reply().as_deref(), Some(""));
    }

    #[test]
    fn completions_url_trims_trailing_slash() {
        assert_eq!(
            completions_url("https://api.deepseek.com/v1/"),
            "https://api.deepseek.com/v1/chat/completions"
        );
        assert_eq!(
            completions_url(DEFAULT_BASE_URL),
            "https://api.deepseek.com/v1/chat/completions"
        );
    }
}
