pub mod interface;
pub mod llm_oracle;
pub mod ollama;

pub use interface::*;
pub use llm_oracle::*;
pub use ollama::*;
