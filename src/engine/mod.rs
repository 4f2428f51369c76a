pub mod registry;
pub mod render;
pub mod style;
pub mod tokenizer;

use crate::error::{CaseError, Result};
use registry::StyleRegistry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use style::CaseStyle;
use tokenizer::{NoiseHandling, Token, Tokenizer};

/// How `convert` treats inputs that are not strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Every non-string is rejected, `null` included.
    #[default]
    Strict,
    /// `null` converts to `""`; other non-strings are rejected.
    Lenient,
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(InputPolicy::Strict),
            "lenient" => Ok(InputPolicy::Lenient),
            _ => Err(format!("Unknown input policy: {}", s)),
        }
    }
}

impl fmt::Display for InputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputPolicy::Strict => write!(f, "strict"),
            InputPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Tokenizer, style table and input policy, fixed at construction.
///
/// Engines are immutable and `Send + Sync`; share one freely across threads.
#[derive(Debug, Clone)]
pub struct CaseEngine {
    tokenizer: Tokenizer,
    styles: StyleRegistry,
    policy: InputPolicy,
}

impl CaseEngine {
    /// Engine with the built-in styles, strict policy and split noise handling.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            styles: StyleRegistry::with_builtins(style::builtin_styles()),
            policy: InputPolicy::default(),
        }
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn noise_handling(&self) -> NoiseHandling {
        self.tokenizer.noise_handling()
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn style_names(&self) -> Vec<&str> {
        self.styles.names()
    }

    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        self.tokenizer.tokenize(input)
    }

    /// Convert an untyped value into the named style.
    ///
    /// The style is resolved first, then the value is checked against the
    /// engine's [`InputPolicy`].
    pub fn convert(&self, input: &Value, style: &str) -> Result<String> {
        let case_style = self.styles.get(style)?;
        let tokens = self.tokenize_value(input)?;
        Ok(render::render(&tokens, case_style))
    }

    /// Tokenize an untyped value, checking it against the engine's [`InputPolicy`].
    ///
    /// Under `Lenient`, `null` yields an empty sequence.
    pub fn tokenize_value(&self, input: &Value) -> Result<Vec<Token>> {
        match input {
            Value::String(s) => Ok(self.tokenize(s)),
            Value::Null if self.policy == InputPolicy::Lenient => Ok(Vec::new()),
            other => Err(CaseError::invalid_input(other)),
        }
    }

    pub fn convert_str(&self, input: &str, style: &str) -> Result<String> {
        let case_style = self.styles.get(style)?;
        Ok(render::render(&self.tokenize(input), case_style))
    }
}

impl Default for CaseEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects settings and style registrations for a [`CaseEngine`].
#[derive(Debug, Default)]
pub struct EngineBuilder {
    policy: InputPolicy,
    noise: NoiseHandling,
    extended: bool,
    registrations: Vec<(String, CaseStyle)>,
}

impl EngineBuilder {
    pub fn policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn noise_handling(mut self, noise: NoiseHandling) -> Self {
        self.noise = noise;
        self
    }

    /// Also register snake, pascal, constant, title, train, path and camel-acronym.
    pub fn with_extended_styles(mut self) -> Self {
        self.extended = true;
        self
    }

    /// Register a style under `name`. Later registrations win, so this can
    /// override a built-in.
    pub fn register_style(mut self, name: impl Into<String>, style: CaseStyle) -> Self {
        self.registrations.push((name.into(), style));
        self
    }

    pub fn build(self) -> Result<CaseEngine> {
        let mut engine = CaseEngine::new();
        engine.tokenizer = Tokenizer::new(self.noise);
        engine.policy = self.policy;

        if self.extended {
            for (name, style) in style::extended_styles() {
                engine.styles.insert(name, style)?;
            }
        }

        for (name, style) in self.registrations {
            engine.styles.insert(&name, style)?;
        }

        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use style::WordCase;

    #[test]
    fn test_default_engine_styles() {
        let engine = CaseEngine::new();
        assert_eq!(engine.style_names(), vec!["camel", "dot", "kebab"]);
        assert_eq!(engine.policy(), InputPolicy::Strict);
        assert_eq!(engine.noise_handling(), NoiseHandling::Split);
    }

    #[test]
    fn test_convert_fixtures() {
        let engine = CaseEngine::new();
        assert_eq!(engine.convert(&json!("hello world"), "camel").unwrap(), "helloWorld");
        assert_eq!(engine.convert(&json!("hello-world"), "dot").unwrap(), "hello.world");
        assert_eq!(
            engine.convert(&json!("my_Variable  Name"), "kebab").unwrap(),
            "my-variable-name"
        );
        assert_eq!(engine.convert(&json!("  hello world  "), "camel").unwrap(), "helloWorld");
        assert_eq!(engine.convert(&json!("hello@#$world"), "camel").unwrap(), "helloWorld");
    }

    #[test]
    fn test_strict_policy_rejects_null() {
        let engine = CaseEngine::new();
        let err = engine.convert(&Value::Null, "camel").unwrap_err();
        assert!(matches!(err, CaseError::InvalidInputType { kind: "null", .. }));
    }

    #[test]
    fn test_lenient_policy_accepts_null() {
        let engine = CaseEngine::builder()
            .policy(InputPolicy::Lenient)
            .build()
            .unwrap();
        assert_eq!(engine.convert(&Value::Null, "kebab").unwrap(), "");
        let err = engine.convert(&json!(123), "kebab").unwrap_err();
        assert!(matches!(err, CaseError::InvalidInputType { kind: "number", .. }));
        let err = engine.convert(&json!({}), "kebab").unwrap_err();
        assert!(matches!(err, CaseError::InvalidInputType { kind: "object", .. }));
    }

    #[test]
    fn test_tokenize_value_follows_policy() {
        let strict = CaseEngine::new();
        assert_eq!(strict.tokenize_value(&json!("myID")).unwrap(), vec!["my", "ID"]);
        assert!(matches!(
            strict.tokenize_value(&Value::Null),
            Err(CaseError::InvalidInputType { kind: "null", .. })
        ));

        let lenient = CaseEngine::builder()
            .policy(InputPolicy::Lenient)
            .build()
            .unwrap();
        assert!(lenient.tokenize_value(&Value::Null).unwrap().is_empty());
        assert!(matches!(
            lenient.tokenize_value(&json!([1])),
            Err(CaseError::InvalidInputType { kind: "array", .. })
        ));
    }

    #[test]
    fn test_unknown_style_checked_before_input() {
        let engine = CaseEngine::builder()
            .policy(InputPolicy::Lenient)
            .build()
            .unwrap();
        assert_eq!(
            engine.convert(&Value::Null, "snake").unwrap_err(),
            CaseError::UnknownStyle("snake".to_string())
        );
        assert_eq!(
            engine.convert(&json!(1), "snake").unwrap_err(),
            CaseError::UnknownStyle("snake".to_string())
        );
    }

    #[test]
    fn test_register_style() {
        let engine = CaseEngine::builder()
            .register_style("snake", CaseStyle::new("_", WordCase::Lower))
            .build()
            .unwrap();
        assert_eq!(engine.convert_str("myVariableName", "snake").unwrap(), "my_variable_name");
        assert_eq!(engine.convert_str("x", "camel").unwrap(), "x");
    }

    #[test]
    fn test_register_overrides_builtin() {
        let engine = CaseEngine::builder()
            .register_style("camel", CaseStyle::camel_acronym())
            .build()
            .unwrap();
        assert_eq!(engine.convert_str("myID", "camel").unwrap(), "myID");
    }

    #[test]
    fn test_register_rejects_bad_name() {
        let err = CaseEngine::builder()
            .register_style("Snake Case", CaseStyle::snake())
            .build()
            .unwrap_err();
        assert_eq!(err, CaseError::InvalidStyleName("Snake Case".to_string()));
    }

    #[test]
    fn test_extended_styles() {
        let engine = CaseEngine::builder().with_extended_styles().build().unwrap();
        assert!(engine.styles().contains("snake"));
        assert_eq!(engine.convert_str("user id", "constant").unwrap(), "USER_ID");
        assert_eq!(engine.convert_str("user id", "pascal").unwrap(), "UserId");
    }

    #[test]
    fn test_strip_noise_engine() {
        let engine = CaseEngine::builder()
            .noise_handling(NoiseHandling::Strip)
            .build()
            .unwrap();
        assert_eq!(engine.convert_str("hello@#$world", "kebab").unwrap(), "helloworld");
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CaseEngine>();
    }
}
