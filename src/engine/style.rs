use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Per-word casing rule. `position` is the zero-based index of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordCase {
    /// `foo`
    Lower,
    /// `FOO`
    Upper,
    /// `Foo`
    Title,
    /// `foo` first, `Foo` after
    Camel,
    /// Like `Camel`, but all-caps words after the first are kept: `myID`
    CamelAcronym,
    /// Word is emitted as it appeared in the input
    Preserve,
}

impl WordCase {
    pub fn apply(self, word: &str, position: usize) -> String {
        match self {
            WordCase::Lower => word.to_lowercase(),
            WordCase::Upper => word.to_uppercase(),
            WordCase::Title => capitalize(word),
            WordCase::Camel if position == 0 => word.to_lowercase(),
            WordCase::Camel => capitalize(word),
            WordCase::CamelAcronym if position == 0 => word.to_lowercase(),
            WordCase::CamelAcronym if is_acronym(word) => word.to_string(),
            WordCase::CamelAcronym => capitalize(word),
            WordCase::Preserve => word.to_string(),
        }
    }
}

impl FromStr for WordCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" => Ok(WordCase::Lower),
            "upper" => Ok(WordCase::Upper),
            "title" => Ok(WordCase::Title),
            "camel" => Ok(WordCase::Camel),
            "camel-acronym" => Ok(WordCase::CamelAcronym),
            "preserve" => Ok(WordCase::Preserve),
            _ => Err(format!("Unknown word case: {}", s)),
        }
    }
}

impl fmt::Display for WordCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCase::Lower => write!(f, "lower"),
            WordCase::Upper => write!(f, "upper"),
            WordCase::Title => write!(f, "title"),
            WordCase::Camel => write!(f, "camel"),
            WordCase::CamelAcronym => write!(f, "camel-acronym"),
            WordCase::Preserve => write!(f, "preserve"),
        }
    }
}

/// Lowercase the word, then uppercase its first character.
pub fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().any(|c| c.is_uppercase())
        && !word.chars().any(|c| c.is_lowercase())
}

type TransformFn = dyn Fn(&str, usize) -> String + Send + Sync;

#[derive(Clone)]
enum Transform {
    Case(WordCase),
    Custom(Arc<TransformFn>),
}

/// An output naming convention: a joiner plus a per-word transform.
#[derive(Clone)]
pub struct CaseStyle {
    joiner: String,
    transform: Transform,
}

impl CaseStyle {
    pub fn new(joiner: impl Into<String>, case: WordCase) -> Self {
        Self {
            joiner: joiner.into(),
            transform: Transform::Case(case),
        }
    }

    /// A style whose words go through an arbitrary `(word, position)` function.
    pub fn custom<F>(joiner: impl Into<String>, transform: F) -> Self
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        Self {
            joiner: joiner.into(),
            transform: Transform::Custom(Arc::new(transform)),
        }
    }

    pub fn joiner(&self) -> &str {
        &self.joiner
    }

    /// The declarative rule behind this style, if it has one.
    pub fn word_case(&self) -> Option<WordCase> {
        match &self.transform {
            Transform::Case(case) => Some(*case),
            Transform::Custom(_) => None,
        }
    }

    pub fn transform_word(&self, word: &str, position: usize) -> String {
        match &self.transform {
            Transform::Case(case) => case.apply(word, position),
            Transform::Custom(f) => f(word, position),
        }
    }

    pub fn camel() -> Self {
        Self::new("", WordCase::Camel)
    }

    pub fn kebab() -> Self {
        Self::new("-", WordCase::Lower)
    }

    pub fn dot() -> Self {
        Self::new(".", WordCase::Lower)
    }

    pub fn snake() -> Self {
        Self::new("_", WordCase::Lower)
    }

    pub fn pascal() -> Self {
        Self::new("", WordCase::Title)
    }

    pub fn constant() -> Self {
        Self::new("_", WordCase::Upper)
    }

    pub fn title() -> Self {
        Self::new(" ", WordCase::Title)
    }

    pub fn train() -> Self {
        Self::new("-", WordCase::Title)
    }

    pub fn path() -> Self {
        Self::new("/", WordCase::Lower)
    }

    pub fn camel_acronym() -> Self {
        Self::new("", WordCase::CamelAcronym)
    }
}

impl fmt::Debug for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transform = match &self.transform {
            Transform::Case(case) => case.to_string(),
            Transform::Custom(_) => "custom".to_string(),
        };
        f.debug_struct("CaseStyle")
            .field("joiner", &self.joiner)
            .field("transform", &transform)
            .finish()
    }
}

/// Styles every engine starts with.
pub fn builtin_styles() -> Vec<(&'static str, CaseStyle)> {
    vec![
        ("camel", CaseStyle::camel()),
        ("kebab", CaseStyle::kebab()),
        ("dot", CaseStyle::dot()),
    ]
}

/// Ready-made styles that are only registered on request.
pub fn extended_styles() -> Vec<(&'static str, CaseStyle)> {
    vec![
        ("snake", CaseStyle::snake()),
        ("pascal", CaseStyle::pascal()),
        ("constant", CaseStyle::constant()),
        ("title", CaseStyle::title()),
        ("train", CaseStyle::train()),
        ("path", CaseStyle::path()),
        ("camel-acronym", CaseStyle::camel_acronym()),
    ]
}
