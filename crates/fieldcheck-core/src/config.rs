//! Configuration file support
//!
//! ```toml
//! template = "templates/onboarding.json"
//!
//! [logging]
//! profile = "production"
//! filter = "fieldcheck=debug"
//!
//! [output]
//! format = "json"
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface early.

use crate::errors::{FieldCheckError, Result};
use crate::logging_facility::Profile;
use crate::render::OutputFormat;
use crate::template::Template;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory by [`Config::discover`]
pub const DEFAULT_CONFIG_FILE: &str = "fieldcheck.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Template file; the built-in reference template when unset
    pub template: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub profile: Profile,
    /// EnvFilter directive replacing the profile default
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on malformed TOML or unknown keys.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file
    ///
    /// A relative `template` path is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| FieldCheckError::io(path, &e))?;
        let mut config = Self::parse(&text)?;
        if let (Some(template), Some(base)) = (&config.template, path.parent()) {
            if template.is_relative() {
                config.template = Some(base.join(template));
            }
        }
        Ok(config)
    }

    /// Load `fieldcheck.toml` from `dir` if present, defaults otherwise
    ///
    /// # Errors
    ///
    /// As [`Config::load`] when the file exists but is unreadable or invalid.
    pub fn discover(dir: &Path) -> Result<Self> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// The configured template, or the built-in reference template
    ///
    /// # Errors
    ///
    /// As [`Template::load`].
    pub fn resolve_template(&self) -> Result<Template> {
        match &self.template {
            Some(path) => Template::load(path),
            None => Ok(Template::reference()),
        }
    }
}
