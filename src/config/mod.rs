//! Synthetic-photometry resource locations and `synphot.toml` handling.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── keys       # ConfigKey table (names, defaults, descriptions)
//! ├── group      # [stdstar] / [extinction] / [passband]
//! ├── file       # synphot.toml parsing and persisted edits
//! ├── refresh    # set_files(): re-derive file paths from directories
//! ├── template   # Commented synphot.toml template
//! ├── temp       # Scoped overrides (set_temp)
//! ├── types/     # ConfigError, global handle
//! └── mod.rs     # SynphotConfig (this file)
//! ```
//!
//! # Derived defaults
//!
//! File keys default to `join(parent_dir, filename)`, evaluated once when the
//! config is built. Changing a directory afterwards does not move its files
//! until [`SynphotConfig::set_files`] runs.

mod file;
mod group;
mod keys;
mod refresh;
mod template;
mod temp;
pub mod types;
mod util;

pub use file::write_values;
pub use group::Group;
pub use keys::{ConfigKey, Source};
pub use template::template;
pub use temp::TempValue;
pub use types::{
    ConfigDiagnostics, ConfigError, cfg, init_config, reload_config, update_config,
};
pub use util::{ValueKind, find_config_file, join_path};

use file::{Overrides, parse_overrides};
use types::handle::content_hash;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename.
pub const CONFIG_FILE: &str = "synphot.toml";

// ============================================================================
// registry
// ============================================================================

/// Registry of every recognized key with its default and current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynphotConfig {
    /// File this config was loaded from, if any
    config_path: Option<PathBuf>,
    /// Hash of the file content this config was parsed from, 0 if none
    content_hash: u64,
    /// Defaults captured at construction, indexed by [`ConfigKey::index`]
    defaults: [String; ConfigKey::COUNT],
    values: [String; ConfigKey::COUNT],
}

/// Snapshot of one entry, for listing and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry<'a> {
    pub key: ConfigKey,
    pub group: Group,
    pub description: &'static str,
    pub default_value: &'a str,
    pub current_value: &'a str,
    pub kind: ValueKind,
}

impl ConfigEntry<'_> {
    pub fn is_modified(&self) -> bool {
        self.default_value != self.current_value
    }
}

impl Default for SynphotConfig {
    fn default() -> Self {
        Self::from_overrides(&Overrides::default())
    }
}

impl SynphotConfig {
    /// Build a config from explicit overrides.
    ///
    /// Directory overrides apply first, so derived file defaults follow the
    /// overridden directories. File overrides apply last and win.
    fn from_overrides(overrides: &Overrides) -> Self {
        let mut defaults: [String; ConfigKey::COUNT] = std::array::from_fn(|_| String::new());
        let mut values: [String; ConfigKey::COUNT] = std::array::from_fn(|_| String::new());

        for &key in ConfigKey::ALL {
            if let Source::Directory(default) = key.source() {
                defaults[key.index()] = default.to_string();
                values[key.index()] = overrides
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| default.to_string());
            }
        }

        for &key in ConfigKey::ALL {
            if let Some((parent, filename)) = key.derivation() {
                let derived = join_path(&values[parent.index()], filename);
                values[key.index()] = overrides
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| derived.clone());
                defaults[key.index()] = derived;
            }
        }

        Self {
            config_path: None,
            content_hash: 0,
            defaults,
            values,
        }
    }

    /// Load `config_name`, searching upward from the current directory.
    ///
    /// Falls back to built-in defaults when no file is found.
    pub fn load(config_name: &Path) -> Result<Self, ConfigError> {
        match find_config_file(config_name) {
            Some(path) => {
                crate::debug!("config"; "loading {}", path.display());
                Self::from_path(&path)
            }
            None => {
                crate::debug!("config"; "{} not found, using defaults", config_name.display());
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from a TOML string, silently skipping unknown fields.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Self::parse_with_ignored(content).map(|(config, _)| config)
    }

    /// Load configuration from a file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_content(path, &content)
    }

    /// Build from `content` already read from `path`.
    ///
    /// The stored hash covers exactly these bytes, so a later reload compares
    /// against what was parsed rather than a second read of the file.
    pub(crate) fn from_content(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let (mut config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            let display_path = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            crate::log!("warning"; "unknown fields in {}, ignoring:", display_path);
            for field in &ignored {
                eprintln!("- {field}");
            }
        }

        config.config_path = Some(path.to_path_buf());
        config.content_hash = content_hash(content.as_bytes());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown tables or keys.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let (overrides, diag) = parse_overrides(content)?;
        let ignored = diag.ignored().to_vec();
        diag.into_result().map_err(ConfigError::Diagnostics)?;
        Ok((Self::from_overrides(&overrides), ignored))
    }

    /// File this config was loaded from.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Hash of the file content this config was parsed from.
    pub(crate) fn content_hash(&self) -> u64 {
        self.content_hash
    }

    // ========================================================================
    // key access
    // ========================================================================

    /// Current value of `key`.
    #[inline]
    pub fn get(&self, key: ConfigKey) -> &str {
        &self.values[key.index()]
    }

    /// Overwrite the current value of `key`.
    ///
    /// The value is stored verbatim. Entries derived from `key` keep their
    /// values until [`set_files`](Self::set_files) runs.
    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        self.values[key.index()] = value.into();
    }

    /// Default captured when this config was built.
    #[inline]
    pub fn default_value(&self, key: ConfigKey) -> &str {
        &self.defaults[key.index()]
    }

    /// Restore the construction-time default of `key`.
    pub fn reset(&mut self, key: ConfigKey) {
        self.values[key.index()] = self.defaults[key.index()].clone();
    }

    pub fn is_modified(&self, key: ConfigKey) -> bool {
        self.get(key) != self.default_value(key)
    }

    pub fn entry(&self, key: ConfigKey) -> ConfigEntry<'_> {
        ConfigEntry {
            key,
            group: key.group(),
            description: key.description(),
            default_value: self.default_value(key),
            current_value: self.get(key),
            kind: ValueKind::of(self.get(key)),
        }
    }

    /// Every entry in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = ConfigEntry<'_>> {
        ConfigKey::ALL.iter().map(|&key| self.entry(key))
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config content, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SynphotConfig {
    let (parsed, ignored) = SynphotConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
