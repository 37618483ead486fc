use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat API error ({status})")]
    Api { status: u16 },

    #[error("chat request failed: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    // Loose on purpose: some model wrappers have been seen returning
    // non-string content here, so coerce instead of failing to decode.
    content: serde_json::Value,
}

/// Non-streaming client for the Ollama `/api/chat` endpoint.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one chat completion and return the reply content, trimmed.
    /// An empty reply is returned as-is; deciding what to do with it is the
    /// caller's policy.
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        debug!("chat request: model={}, url={}", self.model, url);

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Api {
                status: status.as_u16(),
            });
        }

        let reply: ChatResponse = response.json().await?;
        Ok(normalize_content(reply.message.content))
    }
}

fn normalize_content(content: serde_json::Value) -> String {
    let text = match content {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    };
    text.trim().to_string()
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OllamaClient {
        OllamaClient::new(server.uri(), "qwen3:0.6b".to_string())
    }

    #[tokio::test]
    async fn chat_extracts_message_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_partial_json(serde_json::json!({
                "model": "qwen3:0.6b",
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "qwen3:0.6b",
                "message": {"role": "assistant", "content": "  Spanish  "},
                "done": true
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let reply = client
            .chat(&[ChatMessage::user("¡Hola! ¿Cómo estás?")])
            .await
            .unwrap();
        assert_eq!(reply, "Spanish");
    }

    #[tokio::test]
    async fn chat_coerces_non_string_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": {"role": "assistant", "content": 7},
                "done": true
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let reply = client.chat(&[ChatMessage::user("hi")]).await.unwrap();
        assert_eq!(reply, "7");
    }

    #[tokio::test]
    async fn chat_non_2xx_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.chat(&[ChatMessage::user("hi")]).await;
        assert!(matches!(result, Err(ChatError::Api { status: 500 })));
    }

    #[tokio::test]
    async fn chat_malformed_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.chat(&[ChatMessage::user("hi")]).await;
        assert!(matches!(result, Err(ChatError::Network(_))));
    }
}
