use serde::{Deserialize, Serialize};

use crate::config::AdvisorConfig;
use crate::error::AdvisorError;

/// Environment variables checked for an API key, first match wins.
pub const API_KEY_VARS: [&str; 2] = ["DEEPSEEK_API_KEY", "OPENAI_API_KEY"];

/// The request step of the advisor: send one system/user exchange and return
/// the raw reply text.
pub trait MoveClient {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AdvisorError>;
}

/// API key for the move-suggestion service.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    source: &'static str,
}

impl Credentials {
    /// Resolve credentials from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve credentials through `lookup`, trying [`API_KEY_VARS`] in order.
    /// Blank values count as unset.
    pub fn resolve_with(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        API_KEY_VARS.iter().find_map(|&name| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|api_key| Credentials {
                    api_key,
                    source: name,
                })
        })
    }

    /// Name of the variable the key was read from
    pub fn source(&self) -> &'static str {
        self.source
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Blocking client for an OpenAI-compatible chat completions endpoint.
pub struct ChatClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    credentials: Credentials,
}

impl ChatClient {
    pub fn new(config: &AdvisorConfig, credentials: Credentials) -> Result<Self, AdvisorError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(ChatClient {
            http,
            endpoint: endpoint(&config.base_url),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            credentials,
        })
    }
}

fn endpoint(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// First choice's message content, if any.
fn reply_content(body: ChatResponse) -> Result<String, AdvisorError> {
    body.choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(AdvisorError::EmptyReply)
}

impl MoveClient for ChatClient {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AdvisorError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: self.max_tokens,
            stream: false,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.credentials.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AdvisorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        reply_content(response.json()?)
    }
}
