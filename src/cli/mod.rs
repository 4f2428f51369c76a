pub mod output;

use crate::engine::CaseEngine;
use rayon::prelude::*;
use serde_json::Value;

/// What to do with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Convert(&'a str),
    Tokenize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted(String),
    Tokens(Vec<String>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub outcome: Outcome,
}

impl Conversion {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

/// Run `action` on one raw input. With `json`, the input is parsed as a JSON
/// literal first so non-string values reach the engine's type check.
pub fn process(engine: &CaseEngine, raw: &str, json: bool, action: Action<'_>) -> Outcome {
    let value = if json {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => value,
            Err(e) => return Outcome::Failed(format!("Invalid JSON literal: {}", e)),
        }
    } else {
        Value::String(raw.to_string())
    };

    match action {
        Action::Convert(style) => match engine.convert(&value, style) {
            Ok(output) => Outcome::Converted(output),
            Err(e) => Outcome::Failed(e.to_string()),
        },
        Action::Tokenize => match engine.tokenize_value(&value) {
            Ok(tokens) => Outcome::Tokens(tokens.into_iter().map(|t| t.into_string()).collect()),
            Err(e) => Outcome::Failed(e.to_string()),
        },
    }
}

/// Process every input in parallel. Results keep the input order.
pub fn process_batch(
    engine: &CaseEngine,
    inputs: &[String],
    json: bool,
    action: Action<'_>,
) -> Vec<Conversion> {
    inputs
        .par_iter()
        .map(|raw| Conversion {
            input: raw.clone(),
            outcome: process(engine, raw, json, action),
        })
        .collect()
}
