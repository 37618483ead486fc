use async_trait::async_trait;
use tracing::info;

use super::interface::LanguageOracleInterface;
use super::ollama::{ChatMessage, OllamaClient};

const LANGUAGE_PROMPT: &str = "You are a language identification assistant. \
    Identify the primary language of the user's message. \
    Respond with only the name of the language in English \
    (for example: 'English', 'German', 'French', 'Spanish', 'Japanese', 'Korean', 'Arabic', etc.). \
    Do not include any punctuation, explanations, or extra text — \
    just the language name itself.";

const TRANSLATION_PROMPT: &str = "You are a professional translation assistant. \
    Translate the user's message into clear, natural English. \
    If the text is already in English, just rewrite it to be clear and fluent. \
    Only return the translated text itself, without any explanations, labels, or quotes.";

/// Language oracle backed by an Ollama chat model.
/// Each operation is a single one-shot prompt; the two prompts are
/// independent and share nothing but the client handle.
pub struct LlmOracle {
    client: OllamaClient,
}

impl LlmOracle {
    pub fn new(client: OllamaClient) -> Self {
        info!("Initialized LlmOracle: model={}", client.model());
        Self { client }
    }

    async fn ask(&self, system: &str, text: &str) -> Result<String, anyhow::Error> {
        let messages = [ChatMessage::system(system), ChatMessage::user(text)];
        let reply = self.client.chat(&messages).await?;
        Ok(reply)
    }
}

#[async_trait]
impl LanguageOracleInterface for LlmOracle {
    async fn detect_language(&self, text: &str) -> Result<String, anyhow::Error> {
        self.ask(LANGUAGE_PROMPT, text).await
    }

    async fn translate_to_english(&self, text: &str) -> Result<String, anyhow::Error> {
        self.ask(TRANSLATION_PROMPT, text).await
    }
}
