use crate::engine::style::{CaseStyle, WordCase};
use crate::engine::tokenizer::NoiseHandling;
use crate::engine::{CaseEngine, InputPolicy};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const LOCAL_CONFIG_FILE: &str = ".caseconv.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleSpec {
    pub joiner: String,

    #[serde(default = "default_word_case")]
    pub case: WordCase,
}

fn default_word_case() -> WordCase {
    WordCase::Lower
}

impl StyleSpec {
    pub fn to_style(&self) -> CaseStyle {
        CaseStyle::new(self.joiner.clone(), self.case)
    }
}

/// One config file. Keys it leaves out keep the value from lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigLayer {
    pub policy: Option<InputPolicy>,
    pub noise: Option<NoiseHandling>,
    pub default_style: Option<String>,
    pub extended_styles: Option<bool>,
    pub styles: BTreeMap<String, StyleSpec>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub policy: InputPolicy,
    pub noise: NoiseHandling,
    pub default_style: String,
    pub extended_styles: bool,
    pub styles: BTreeMap<String, StyleSpec>,
}

fn default_style() -> String {
    "camel".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: InputPolicy::Strict,
            noise: NoiseHandling::Split,
            default_style: default_style(),
            extended_styles: false,
            styles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > explicit file > local config > global config > defaults
    pub fn load(
        explicit_path: Option<&Path>,
        policy: Option<InputPolicy>,
        noise: Option<NoiseHandling>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = ConfigLayer::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            let local_config = ConfigLayer::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        if let Some(path) = explicit_path {
            let explicit_config = ConfigLayer::from_file(path)?;
            config = config.merge(explicit_config);
        }

        // Apply CLI overrides
        if let Some(policy) = policy {
            config.policy = policy;
        }
        if let Some(noise) = noise {
            config.noise = noise;
        }

        Ok(config)
    }

    /// A single file layered over the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    /// Every key set in `layer` overrides self; custom styles are merged by name.
    pub fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(policy) = layer.policy {
            self.policy = policy;
        }
        if let Some(noise) = layer.noise {
            self.noise = noise;
        }
        if let Some(style) = layer.default_style {
            self.default_style = style;
        }
        if let Some(extended) = layer.extended_styles {
            self.extended_styles = extended;
        }
        self.styles.extend(layer.styles);
        self
    }

    /// Build an engine carrying this config's policy, noise handling and styles.
    pub fn build_engine(&self) -> Result<CaseEngine> {
        let mut builder = CaseEngine::builder()
            .policy(self.policy)
            .noise_handling(self.noise);

        if self.extended_styles {
            builder = builder.with_extended_styles();
        }

        for (name, spec) in &self.styles {
            builder = builder.register_style(name.clone(), spec.to_style());
        }

        builder.build().context("Failed to register configured styles")
    }

    /// The configured default style, provided `engine` has it registered.
    pub fn default_style_in(&self, engine: &CaseEngine) -> Result<&str> {
        if !engine.styles().contains(&self.default_style) {
            anyhow::bail!(
                "Default style '{}' is not registered (available: {})",
                self.default_style,
                engine.style_names().join(", ")
            );
        }
        Ok(&self.default_style)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseconv").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
