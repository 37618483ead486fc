use std::sync::Arc;

use crate::config::Config;
use crate::oracle::{LanguageOracleInterface, LlmOracle, OllamaClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub oracle: Arc<dyn LanguageOracleInterface>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = OllamaClient::new(
            config.resolve_ollama_url(),
            config.llm_config.model_name.clone(),
        );
        let oracle = Arc::new(LlmOracle::new(client));

        Self { config, oracle }
    }

    #[cfg(test)]
    pub fn with_oracle(oracle: Arc<dyn LanguageOracleInterface>) -> Self {
        Self {
            config: Config::default(),
            oracle,
        }
    }
}
