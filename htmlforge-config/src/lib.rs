//! Shared configuration loader for htmlforge documents.
//!
//! `defaults/htmlforge.default.toml` is embedded into every binary so that
//! docs and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`ForgeConfig`], which converts into the [`DocumentOptions`] a
//! [`Document`](htmlforge::Document) is created with.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use htmlforge::{DocumentOptions, HoistPolicy};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_TOML: &str = include_str!("../defaults/htmlforge.default.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("styles.hoist_marker must be a non-empty tag name")]
    EmptyHoistMarker,
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ForgeConfig {
    pub render: RenderConfig,
    pub styles: StylesConfig,
}

/// Output layout knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub indent_width: usize,
    pub signature: bool,
}

/// Where deduplicated style rules are written.
#[derive(Debug, Clone, Deserialize)]
pub struct StylesConfig {
    pub hoist: HoistMode,
    pub hoist_marker: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoistMode {
    Inline,
    SinglePoint,
}

impl ForgeConfig {
    /// Options for [`Document::with_options`](htmlforge::Document::with_options).
    pub fn document_options(&self) -> DocumentOptions {
        let hoist = match self.styles.hoist {
            HoistMode::Inline => HoistPolicy::Inline,
            HoistMode::SinglePoint => HoistPolicy::SinglePoint {
                marker: self.styles.hoist_marker.to_ascii_lowercase(),
            },
        };

        DocumentOptions {
            indent_width: self.render.indent_width,
            signature: self.render.signature,
            hoist,
        }
    }
}

/// Builds a [`ForgeConfig`] from the embedded defaults plus any TOML files
/// and key overrides the application adds, in that order of precedence.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `htmlforge.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file with document options. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Like [`Loader::with_file`], but a missing file is skipped.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `render.indent_width`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and check that single-point hoisting has a marker.
    pub fn build(self) -> Result<ForgeConfig, ConfigError> {
        let config: ForgeConfig = self.builder.build()?.try_deserialize()?;
        if config.styles.hoist == HoistMode::SinglePoint && config.styles.hoist_marker.trim().is_empty() {
            return Err(ConfigError::EmptyHoistMarker);
        }
        tracing::debug!(?config, "loaded htmlforge configuration");
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in document settings with nothing layered on top.
pub fn load_defaults() -> Result<ForgeConfig, ConfigError> {
    Loader::new().build()
}
