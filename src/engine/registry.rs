use crate::engine::style::CaseStyle;
use crate::error::{CaseError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

lazy_static! {
    static ref STYLE_NAME: Regex = Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").unwrap();
}

pub fn is_valid_style_name(name: &str) -> bool {
    STYLE_NAME.is_match(name)
}

/// Named case styles. Filled while an engine is built, read-only afterwards.
///
/// Only an engine can populate one; callers reach it through
/// [`CaseEngine::styles`](crate::CaseEngine::styles).
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<String, CaseStyle>,
}

impl StyleRegistry {
    pub(crate) fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Registry holding `styles`, whose names are static and known to be valid.
    pub(crate) fn with_builtins(styles: Vec<(&'static str, CaseStyle)>) -> Self {
        let mut registry = Self::new();
        for (name, style) in styles {
            registry.put(name, style);
        }
        registry
    }

    /// Add a style, replacing any earlier style with the same name.
    pub(crate) fn insert(&mut self, name: &str, style: CaseStyle) -> Result<()> {
        if !is_valid_style_name(name) {
            return Err(CaseError::InvalidStyleName(name.to_string()));
        }

        self.put(name, style);
        Ok(())
    }

    fn put(&mut self, name: &str, style: CaseStyle) {
        if self.styles.insert(name.to_string(), style).is_some() {
            debug!("Replaced case style '{}'", name);
        } else {
            debug!("Registered case style '{}'", name);
        }
    }

    pub fn get(&self, name: &str) -> Result<&CaseStyle> {
        self.styles
            .get(name)
            .ok_or_else(|| CaseError::UnknownStyle(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
