//! Global config with atomic update support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! Readers hold an immutable snapshot; writers publish a whole new config, so
//! a multi-key update such as `set_files` is seen entirely or not at all.

use crate::config::{ConfigError, SynphotConfig};
use arc_swap::ArcSwap;
use rustc_hash::FxHasher;
use std::{
    fs,
    hash::Hasher,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SynphotConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SynphotConfig::default()));

/// Hash of the config file content the current config was loaded from.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

pub(crate) fn content_hash(data: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data);
    hasher.finish()
}

#[inline]
pub fn cfg() -> Arc<SynphotConfig> {
    CONFIG.load_full()
}

#[inline]
pub fn init_config(config: SynphotConfig) -> Arc<SynphotConfig> {
    CONFIG_HASH.store(config.content_hash(), Ordering::Relaxed);

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// Apply `f` to a copy of the current config and publish the result.
///
/// Concurrent updates are retried against the latest config, so none is lost.
/// `f` may run more than once. Returns the config this call published, even if
/// another writer has replaced it since.
pub fn update_config<F>(mut f: F) -> Arc<SynphotConfig>
where
    F: FnMut(&mut SynphotConfig),
{
    let mut published = None;
    CONFIG.rcu(|current| {
        let mut next = SynphotConfig::clone(current);
        f(&mut next);
        let next = Arc::new(next);
        published = Some(Arc::clone(&next));
        next
    });
    published.unwrap_or_else(cfg)
}

/// Reload config from disk if content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged or the
/// current config was not loaded from a file.
pub fn reload_config() -> Result<bool, ConfigError> {
    let current = cfg();
    let Some(path) = current.config_path() else {
        return Ok(false);
    };

    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    if content_hash(content.as_bytes()) == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let new_config = SynphotConfig::from_content(path, &content)?;
    CONFIG_HASH.store(new_config.content_hash(), Ordering::Relaxed);
    CONFIG.store(Arc::new(new_config));

    crate::debug!("config"; "reloaded {}", path.display());
    Ok(true)
}
