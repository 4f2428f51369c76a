use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A word extracted from the input, with its original character case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Deref for Token {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

/// What happens to characters that are neither alphanumeric nor delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseHandling {
    /// Drop the character and break the word there.
    #[default]
    Split,
    /// Drop the character; its neighbours become adjacent.
    Strip,
}

impl FromStr for NoiseHandling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "split" => Ok(NoiseHandling::Split),
            "strip" => Ok(NoiseHandling::Strip),
            _ => Err(format!("Unknown noise handling: {}", s)),
        }
    }
}

impl fmt::Display for NoiseHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseHandling::Split => write!(f, "split"),
            NoiseHandling::Strip => write!(f, "strip"),
        }
    }
}

/// Splits identifier-like text into words.
///
/// Words break on whitespace, `-`, `_` and `.`, and at camel boundaries
/// (a lowercase letter or digit followed by an uppercase letter). Runs of
/// uppercase letters stay together, so `myID` yields `my` and `ID`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    noise: NoiseHandling,
}

impl Tokenizer {
    pub fn new(noise: NoiseHandling) -> Self {
        Self { noise }
    }

    pub fn noise_handling(&self) -> NoiseHandling {
        self.noise
    }

    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let mut tokens = Vec::new();
        let mut current = String::new();
        // Last character kept in `current`, for camel boundary detection.
        let mut prev: Option<char> = None;

        for ch in trimmed.chars() {
            if is_delimiter(ch) {
                flush(&mut current, &mut tokens);
                prev = None;
                continue;
            }

            if !ch.is_ascii_alphanumeric() {
                if self.noise == NoiseHandling::Split {
                    flush(&mut current, &mut tokens);
                    prev = None;
                }
                continue;
            }

            if ch.is_ascii_uppercase() && prev.is_some_and(is_camel_lead) {
                flush(&mut current, &mut tokens);
            }

            current.push(ch);
            prev = Some(ch);
        }

        flush(&mut current, &mut tokens);
        tokens
    }
}

pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '-' | '_' | '.')
}

fn is_camel_lead(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit()
}

fn flush(current: &mut String, tokens: &mut Vec<Token>) {
    if !current.is_empty() {
        tokens.push(Token {
            text: std::mem::take(current),
        });
    }
}
