//! `synphot.toml` parsing and persisted edits.
//!
//! # Example
//!
//! ```toml
//! [stdstar]
//! stdstar_dir = "/data/cdbs/calspec/"     # local mirror
//!
//! [passband]
//! johnson_v_file = "~/filters/v.fits"     # single file pinned elsewhere
//! ```
//!
//! Keys must sit in the table of their group. Unknown tables and keys are
//! reported and skipped; values that are not strings are errors.

use super::{ConfigDiagnostics, ConfigError, ConfigKey, Group, util::expand_tilde};
use rustc_hash::FxHashMap;
use std::{fs, path::Path};

/// Explicit values found in a config file.
pub(crate) type Overrides = FxHashMap<ConfigKey, String>;

/// Collect overrides from TOML content.
///
/// Diagnostics carry both fatal errors and the ignored field list; the caller
/// decides what to do with each.
pub(crate) fn parse_overrides(
    content: &str,
) -> Result<(Overrides, ConfigDiagnostics), ConfigError> {
    let table: toml::Table = toml::from_str(content)?;
    let mut overrides = Overrides::default();
    let mut diag = ConfigDiagnostics::new();

    for (table_name, value) in &table {
        let Ok(group) = table_name.parse::<Group>() else {
            match table_name.parse::<ConfigKey>() {
                Ok(key) => diag.error_with_hint(
                    table_name.as_str(),
                    "key outside of a group table",
                    format!("move it under [{}]", key.group()),
                ),
                Err(_) => diag.ignore(table_name.as_str()),
            }
            continue;
        };

        let Some(entries) = value.as_table() else {
            diag.error(
                table_name.as_str(),
                format!("expected a table, found {}", value.type_str()),
            );
            continue;
        };

        for (name, value) in entries {
            let path = format!("{table_name}.{name}");
            let Ok(key) = name.parse::<ConfigKey>() else {
                diag.ignore(path);
                continue;
            };

            if key.group() != group {
                diag.error_with_hint(
                    path,
                    format!("`{name}` belongs to the [{}] table", key.group()),
                    format!("move it under [{}]", key.group()),
                );
                continue;
            }

            match value.as_str() {
                Some(s) => {
                    overrides.insert(key, expand_tilde(s));
                }
                None => diag.error(
                    path,
                    format!("expected a string, found {}", value.type_str()),
                ),
            }
        }
    }

    Ok((overrides, diag))
}

/// Write or remove keys in a config file, creating it when missing.
///
/// `Some(value)` sets the key in its group table, `None` removes it. Empty
/// group tables are dropped. Comments in the existing file are not preserved.
pub fn write_values<'a>(
    path: &Path,
    updates: impl IntoIterator<Item = (ConfigKey, Option<&'a str>)>,
) -> Result<(), ConfigError> {
    let mut table: toml::Table = if path.exists() {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        toml::from_str(&content)?
    } else {
        toml::Table::new()
    };

    for (key, value) in updates {
        let group = key.group().name();
        match value {
            Some(value) => {
                let section = table
                    .entry(group)
                    .or_insert(toml::Value::Table(toml::Table::new()));
                if let toml::Value::Table(section) = section {
                    section.insert(key.name().to_string(), toml::Value::String(value.into()));
                } else {
                    *section = toml::Value::Table(toml::Table::from_iter([(
                        key.name().to_string(),
                        toml::Value::String(value.into()),
                    )]));
                }
            }
            None => {
                let now_empty = match table.get_mut(group) {
                    Some(toml::Value::Table(section)) => {
                        section.remove(key.name());
                        section.is_empty()
                    }
                    _ => false,
                };
                if now_empty {
                    table.remove(group);
                }
            }
        }
    }

    let content = toml::to_string(&table)?;
    fs::write(path, content).map_err(|err| ConfigError::Io(path.to_path_buf(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SynphotConfig;
    use tempfile::TempDir;

    #[test]
    fn test_parse_overrides() {
        let (overrides, diag) = parse_overrides(
            "[extinction]\nextinction_dir = \"/ext/\"\n[passband]\ncousins_r_file = \"/r.fits\"",
        )
        .unwrap();

        assert!(!diag.has_errors());
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides[&ConfigKey::ExtinctionDir], "/ext/");
        assert_eq!(overrides[&ConfigKey::CousinsRFile], "/r.fits");
    }

    #[test]
    fn test_key_in_wrong_group() {
        let (overrides, diag) = parse_overrides("[passband]\nvega_file = \"/vega.fits\"").unwrap();

        assert!(overrides.is_empty());
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, "passband.vega_file");
        assert_eq!(
            diag.errors()[0].hint.as_deref(),
            Some("move it under [stdstar]")
        );
    }

    #[test]
    fn test_top_level_key() {
        let (_, diag) = parse_overrides("passband_dir = \"/pb/\"").unwrap();
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, "passband_dir");
    }

    #[test]
    fn test_group_not_a_table() {
        let (_, diag) = parse_overrides("stdstar = \"/x/\"").unwrap();
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("expected a table"));
    }

    #[test]
    fn test_tilde_expanded_on_load() {
        let (overrides, _) = parse_overrides("[stdstar]\nstdstar_dir = \"~/calspec/\"").unwrap();
        let value = &overrides[&ConfigKey::StdstarDir];
        assert!(!value.starts_with('~'));
        assert!(value.ends_with("/calspec/"));
    }

    #[test]
    fn test_write_values_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");

        write_values(&path, [(ConfigKey::PassbandDir, Some("/data/comp/"))]).unwrap();

        let config = SynphotConfig::from_path(&path).unwrap();
        assert_eq!(config.get(ConfigKey::PassbandDir), "/data/comp/");
        assert_eq!(
            config.get(ConfigKey::JohnsonKFile),
            "/data/comp/johnson_k_003_syn.fits"
        );
    }

    #[test]
    fn test_write_values_preserves_other_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");
        fs::write(
            &path,
            "[extinction]\nextinction_dir = \"/ext/\"\n[stdstar]\nvega_file = \"/v.fits\"",
        )
        .unwrap();

        write_values(
            &path,
            [
                (ConfigKey::VegaFile, None),
                (ConfigKey::MwavgFile, Some("/mw.fits")),
            ],
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("[stdstar]"));

        let config = SynphotConfig::from_path(&path).unwrap();
        assert_eq!(config.get(ConfigKey::ExtinctionDir), "/ext/");
        assert_eq!(config.get(ConfigKey::MwavgFile), "/mw.fits");
        assert!(!config.is_modified(ConfigKey::VegaFile));
    }

    #[test]
    fn test_write_values_rejects_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");
        fs::write(&path, "[stdstar").unwrap();

        let result = write_values(&path, [(ConfigKey::StdstarDir, Some("/x/"))]);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
