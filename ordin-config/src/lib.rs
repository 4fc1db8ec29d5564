//! Jurisdiction registry loader for the ordin toolchain.
//!
//! `defaults/jurisdictions.default.toml` is embedded into every binary so
//! a bare invocation always has a usable registry. Applications layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`Registry`]. The search codes themselves are an
//! opaque key space: nothing here validates or rewrites them.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use ordin_parser::SearchParams;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/jurisdictions.default.toml");

/// The jurisdiction registry: name → search-code pair.
#[derive(Debug, Clone, Deserialize)]
pub struct Registry {
    pub jurisdictions: BTreeMap<String, SearchParams>,
}

impl Registry {
    /// The search codes registered for a jurisdiction name.
    pub fn params(&self, name: &str) -> Option<&SearchParams> {
        self.jurisdictions.get(name)
    }

    /// Registered jurisdiction names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.jurisdictions.keys().map(String::as_str)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a registry file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional registry file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Finalize the builder and deserialize the resulting registry.
    pub fn build(self) -> Result<Registry, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Registry, ConfigError> {
    Loader::new().build()
}
