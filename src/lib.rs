//! Resource locations for synthetic photometry.
//!
//! Standard-star spectra, extinction curves and filter passbands are located
//! through [`config::SynphotConfig`], which defaults to the STScI CDBS archive
//! and can be pointed at a local mirror through `synphot.toml`.
//!
//! ```ignore
//! use synphot_config::config::{ConfigKey, SynphotConfig};
//!
//! let mut config = SynphotConfig::load("synphot.toml".as_ref())?;
//! config.set(ConfigKey::StdstarDir, "/local/calspec/");
//! config.set_files();
//! assert_eq!(config.get(ConfigKey::VegaFile), "/local/calspec/alpha_lyr_stis_005.fits");
//! ```

pub mod config;
pub mod logger;
