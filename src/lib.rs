pub mod cli;
pub mod config;
pub mod engine;
pub mod error;

pub use config::Config;
pub use engine::registry::StyleRegistry;
pub use engine::render::render;
pub use engine::style::{CaseStyle, WordCase};
pub use engine::tokenizer::{NoiseHandling, Token, Tokenizer};
pub use engine::{CaseEngine, EngineBuilder, InputPolicy};
pub use error::{CaseError, Result};

use lazy_static::lazy_static;
use serde_json::Value;

lazy_static! {
    /// Built-in styles, strict input policy, split noise handling.
    static ref DEFAULT_ENGINE: CaseEngine = CaseEngine::new();
}

pub fn default_engine() -> &'static CaseEngine {
    &DEFAULT_ENGINE
}

/// Split `input` into words with the default tokenizer.
pub fn tokenize(input: &str) -> Vec<Token> {
    DEFAULT_ENGINE.tokenize(input)
}

/// Convert an untyped value with the default engine.
pub fn convert(input: &Value, style: &str) -> Result<String> {
    DEFAULT_ENGINE.convert(input, style)
}

pub fn convert_str(input: &str, style: &str) -> Result<String> {
    DEFAULT_ENGINE.convert_str(input, style)
}
