//! Scoped overrides.

use super::{ConfigKey, SynphotConfig};
use std::ops::{Deref, DerefMut};

/// Guard returned by [`SynphotConfig::set_temp`].
///
/// Restores the previous value of its key when dropped, including after any
/// further `set` on that key made through the guard.
pub struct TempValue<'a> {
    config: &'a mut SynphotConfig,
    key: ConfigKey,
    previous: Option<String>,
}

impl SynphotConfig {
    /// Override `key` until the returned guard is dropped.
    ///
    /// ```ignore
    /// {
    ///     let config = config.set_temp(ConfigKey::VegaFile, "/tmp/vega.fits");
    ///     load_spectrum(config.get(ConfigKey::VegaFile))?;
    /// }
    /// // vega_file is back to its previous value here
    /// ```
    pub fn set_temp(&mut self, key: ConfigKey, value: impl Into<String>) -> TempValue<'_> {
        let previous = std::mem::replace(&mut self.values[key.index()], value.into());
        TempValue {
            config: self,
            key,
            previous: Some(previous),
        }
    }
}

impl Deref for TempValue<'_> {
    type Target = SynphotConfig;

    fn deref(&self) -> &Self::Target {
        self.config
    }
}

impl DerefMut for TempValue<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.config
    }
}

impl Drop for TempValue<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.config.set(self.key, previous);
        }
    }
}
