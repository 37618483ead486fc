use serde::Serialize;
use tracing::warn;

use crate::oracle::LanguageOracleInterface;

/// Best-effort outcome of one orchestration call. Field names are the wire
/// format of the translate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub is_english: bool,
    pub translated_content: String,
}

/// Sequence the two oracle calls and absorb their failures.
///
/// Detection first: if it fails there is nothing to go on, so assume
/// English and pass the text through unchanged; translation is not
/// attempted. If detection succeeds, the language flag is final and a
/// later translation failure falls back to the original text without
/// touching it. Never returns an error.
pub async fn query_llm_robust(oracle: &dyn LanguageOracleInterface, post: &str) -> QueryResult {
    let fallback = QueryResult {
        is_english: true,
        translated_content: post.to_string(),
    };

    let raw_language = match oracle.detect_language(post).await {
        Ok(label) => label,
        Err(e) => {
            warn!("language detection failed, assuming English: {e:#}");
            return fallback;
        }
    };

    let is_english = raw_language.trim().to_lowercase() == "english";

    let translation = match oracle.translate_to_english(post).await {
        Ok(text) => text,
        Err(e) => {
            warn!("translation failed, returning original text: {e:#}");
            return QueryResult {
                is_english,
                translated_content: post.to_string(),
            };
        }
    };

    // A blank reply is useless; keep the original text instead.
    let translated_content = if translation.trim().is_empty() {
        post.to_string()
    } else {
        translation
    };

    QueryResult {
        is_english,
        translated_content,
    }
}
