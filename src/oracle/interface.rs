use async_trait::async_trait;

/// Interface for the remote language oracle.
/// One-shot request/response against a chat model; no state, no retries.
/// Either call may fail if the remote endpoint is unreachable or returns a
/// malformed reply — absorbing those failures is the caller's concern.
#[async_trait]
pub trait LanguageOracleInterface: Send + Sync {
    /// Name of the primary language of `text`, in English (e.g. "Spanish").
    async fn detect_language(&self, text: &str) -> Result<String, anyhow::Error>;

    /// English rendering of `text`; a rewrite for clarity if already English.
    async fn translate_to_english(&self, text: &str) -> Result<String, anyhow::Error>;
}
