//! `set`, `unset` and `refresh` commands.
//!
//! A file key that is absent from `synphot.toml` follows its directory when
//! the config is loaded, so persisting a refresh means removing the pins.

use anyhow::{Context, Result, bail};
use std::path::Path;
use synphot_config::{
    config::{ConfigKey, SynphotConfig, write_values},
    log,
};

/// Persist `key = value`. With `refresh`, also unpin the group's file keys.
pub fn set_value(path: &Path, key: ConfigKey, value: &str, refresh: bool) -> Result<()> {
    if refresh && !key.is_directory() {
        bail!("--refresh only applies to directory keys, `{key}` is a file key");
    }

    let mut updates = vec![(key, Some(value))];
    if refresh {
        updates.extend(
            key.group()
                .keys()
                .filter(|k| !k.is_directory())
                .map(|k| (k, None)),
        );
    }

    write_values(path, updates)
        .with_context(|| format!("Failed to update '{}'", path.display()))?;
    log!("config"; "{} = {}", key.toml_path(), value);
    Ok(())
}

/// Remove `key` from the config file so it falls back to its default.
pub fn unset_value(path: &Path, key: ConfigKey) -> Result<()> {
    if !path.exists() {
        log!("config"; "{} does not exist, nothing to unset", path.display());
        return Ok(());
    }
    write_values(path, [(key, None)])
        .with_context(|| format!("Failed to update '{}'", path.display()))?;
    log!("config"; "unset {}", key.toml_path());
    Ok(())
}

/// Run `set_files` on the loaded config and report what moved.
pub fn refresh(config: &SynphotConfig, path: &Path, write: bool) -> Result<()> {
    let mut refreshed = config.clone();
    let changed = refreshed.set_files();

    if changed.is_empty() {
        log!("refresh"; "all file paths already follow their directories");
        return Ok(());
    }

    for &key in &changed {
        println!("{} = {}", key.name(), refreshed.get(key));
    }

    if write {
        write_values(path, changed.iter().map(|&k| (k, None)))
            .with_context(|| format!("Failed to update '{}'", path.display()))?;
        log!("refresh"; "{} file path(s) now follow their directories", changed.len());
    } else {
        log!("refresh"; "{} file path(s) differ, use --write to persist", changed.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_set_with_refresh_unpins_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");
        fs::write(&path, "[passband]\njohnson_v_file = \"/pinned/v.fits\"\n").unwrap();

        set_value(&path, ConfigKey::PassbandDir, "/data/comp/", true).unwrap();

        let config = SynphotConfig::from_path(&path).unwrap();
        assert_eq!(
            config.get(ConfigKey::JohnsonVFile),
            "/data/comp/johnson_v_004_syn.fits"
        );
    }

    #[test]
    fn test_set_refresh_rejects_file_key() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");
        assert!(set_value(&path, ConfigKey::VegaFile, "/v.fits", true).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_unset_missing_file_is_noop() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");
        unset_value(&path, ConfigKey::VegaFile).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_refresh_write_removes_stale_pins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");
        fs::write(
            &path,
            "[extinction]\nextinction_dir = \"/ext/\"\nsmcbar_file = \"/old/smc.fits\"\n",
        )
        .unwrap();
        let config = SynphotConfig::from_path(&path).unwrap();

        refresh(&config, &path, true).unwrap();

        let reloaded = SynphotConfig::from_path(&path).unwrap();
        assert_eq!(reloaded.get(ConfigKey::SmcbarFile), "/ext/smc_bar_001.fits");
        assert_eq!(reloaded.get(ConfigKey::ExtinctionDir), "/ext/");
    }

    #[test]
    fn test_refresh_dry_leaves_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");
        let content = "[extinction]\nsmcbar_file = \"/old/smc.fits\"\n";
        fs::write(&path, content).unwrap();
        let config = SynphotConfig::from_path(&path).unwrap();

        refresh(&config, &path, false).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }
}
