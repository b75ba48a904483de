//! Configuration for the COinS encoder

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::CoinsResult;

/// When to parse creator strings into OpenURL author fields.
///
/// The `Auto` behavior mirrors the historical one: author fields are only
/// populated for items whose type label could be resolved. Deployments that
/// want a fixed answer can force it either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorNames {
    /// Parse creator names whenever the item's type label was resolved.
    #[default]
    Auto,
    /// Always parse creator names.
    Always,
    /// Never parse; emit raw `rft.creator` values instead.
    Never,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CoinsConfig {
    /// Author-field parsing policy.
    #[serde(default)]
    pub author_names: AuthorNames,
    /// Placeholder emitted when an item has no usable title.
    #[serde(default = "default_unknown_title")]
    pub unknown_title: String,
}

impl CoinsConfig {
    /// Load configuration from an optional file and environment variables
    pub fn load() -> CoinsResult<Self> {
        let config = Config::builder()
            // Optional configuration file shipped alongside the host config
            .add_source(File::with_name("config/coins").required(false))
            // Environment variables (with prefix COINS_)
            .add_source(Environment::with_prefix("COINS").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl Default for CoinsConfig {
    fn default() -> Self {
        Self {
            author_names: AuthorNames::default(),
            unknown_title: default_unknown_title(),
        }
    }
}

fn default_unknown_title() -> String {
    "[unknown title]".to_string()
}
