//! The fixed table of recognized configuration keys.
//!
//! Every key is declared once in the `config_keys!` invocation below with its
//! stable name, group, default source and description. Directory keys carry a
//! literal default; file keys name their parent directory key and the fixed
//! filename joined onto it.

use super::{ConfigError, Group};
use serde::{Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Where a key's default value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Literal default (archive root).
    Directory(&'static str),
    /// `join(parent, filename)`, evaluated against the parent's value.
    File {
        parent: ConfigKey,
        filename: &'static str,
    },
}

macro_rules! config_keys {
    ($( $variant:ident = $name:literal, $group:ident, $source:expr, $desc:literal; )*) => {
        /// A recognized configuration key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ConfigKey {
            $( $variant, )*
        }

        impl ConfigKey {
            /// All keys in declaration order.
            pub const ALL: &'static [ConfigKey] = &[$( ConfigKey::$variant, )*];

            /// Number of recognized keys.
            pub const COUNT: usize = Self::ALL.len();

            /// Stable identifier used in `synphot.toml` and on the command line.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            pub const fn group(self) -> Group {
                match self {
                    $( Self::$variant => Group::$group, )*
                }
            }

            pub const fn source(self) -> Source {
                match self {
                    $( Self::$variant => $source, )*
                }
            }

            /// Human-readable description.
            pub const fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $desc, )*
                }
            }
        }

        impl FromStr for ConfigKey {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Self::$variant), )*
                    _ => Err(ConfigError::UnknownKey(s.to_string())),
                }
            }
        }
    };
}

use Source::{Directory as Dir, File};

const fn file(parent: ConfigKey, filename: &'static str) -> Source {
    File { parent, filename }
}

use ConfigKey::{ExtinctionDir as Ext, PassbandDir as Pb, StdstarDir as Std};

config_keys! {
    // standard stars
    StdstarDir = "stdstar_dir", Stdstar,
        Dir("ftp://ftp.stsci.edu/cdbs/current_calspec/"),
        "Location of standard star spectra.";
    VegaFile = "vega_file", Stdstar,
        file(Std, "alpha_lyr_stis_005.fits"),
        "Vega";

    // reddening/extinction laws
    ExtinctionDir = "extinction_dir", Extinction,
        Dir("ftp://ftp.stsci.edu/cdbs/extinction/"),
        "Location of extinction files.";
    Lmc30dorFile = "lmc30dor_file", Extinction,
        file(Ext, "lmc_30dorshell_001.fits"),
        "Gordon et al. 2003, ApJ, 594, 279; R_V = 2.76";
    LmcavgFile = "lmcavg_file", Extinction,
        file(Ext, "lmc_diffuse_001.fits"),
        "Gordon et al. 2003, ApJ, 594, 279; R_V = 3.41";
    MwavgFile = "mwavg_file", Extinction,
        file(Ext, "milkyway_diffuse_001.fits"),
        "Cardelli, Clayton, & Mathis 1989, ApJ, 345, 245; R_V = 3.10";
    MwdenseFile = "mwdense_file", Extinction,
        file(Ext, "milkyway_dense_001.fits"),
        "Cardelli, Clayton, & Mathis 1989, ApJ, 345, 245; R_V = 5.00";
    Mwrv21File = "mwrv21_file", Extinction,
        file(Ext, "milkyway_rv21_001.fits"),
        "Cardelli, Clayton, & Mathis 1989, ApJ, 345, 245; R_V = 2.1";
    Mwrv40File = "mwrv40_file", Extinction,
        file(Ext, "milkyway_rv4_001.fits"),
        "Cardelli, Clayton, & Mathis 1989, ApJ, 345, 245; R_V = 4.0";
    SmcbarFile = "smcbar_file", Extinction,
        file(Ext, "smc_bar_001.fits"),
        "Gordon et al. 2003, ApJ, 594, 279; R_V=2.74";
    XgalFile = "xgal_file", Extinction,
        file(Ext, "xgal_starburst_001.fits"),
        "Calzetti et al. 2000, ApJ, 533, 682";

    // common filter passbands
    PassbandDir = "passband_dir", Passband,
        Dir("ftp://ftp.stsci.edu/cdbs/comp/nonhst/"),
        "Location of passband files.";
    BesselHFile = "bessel_h_file", Passband, file(Pb, "bessell_h_004_syn.fits"), "Bessel H";
    BesselJFile = "bessel_j_file", Passband, file(Pb, "bessell_j_003_syn.fits"), "Bessel J";
    BesselKFile = "bessel_k_file", Passband, file(Pb, "bessell_k_003_syn.fits"), "Bessel K";
    CousinsIFile = "cousins_i_file", Passband, file(Pb, "cousins_i_004_syn.fits"), "Cousins I";
    CousinsRFile = "cousins_r_file", Passband, file(Pb, "cousins_r_004_syn.fits"), "Cousins R";
    JohnsonBFile = "johnson_b_file", Passband, file(Pb, "johnson_b_004_syn.fits"), "Johnson B";
    JohnsonIFile = "johnson_i_file", Passband, file(Pb, "johnson_i_003_syn.fits"), "Johnson I";
    JohnsonJFile = "johnson_j_file", Passband, file(Pb, "johnson_j_003_syn.fits"), "Johnson J";
    JohnsonKFile = "johnson_k_file", Passband, file(Pb, "johnson_k_003_syn.fits"), "Johnson K";
    JohnsonRFile = "johnson_r_file", Passband, file(Pb, "johnson_r_003_syn.fits"), "Johnson R";
    JohnsonUFile = "johnson_u_file", Passband, file(Pb, "johnson_u_004_syn.fits"), "Johnson U";
    JohnsonVFile = "johnson_v_file", Passband, file(Pb, "johnson_v_004_syn.fits"), "Johnson V";
}

impl ConfigKey {
    /// Position in [`ConfigKey::ALL`], used to index per-key storage.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parent directory key and fixed filename, or `None` for directory keys.
    pub const fn derivation(self) -> Option<(ConfigKey, &'static str)> {
        match self.source() {
            Source::Directory(_) => None,
            Source::File { parent, filename } => Some((parent, filename)),
        }
    }

    pub const fn is_directory(self) -> bool {
        matches!(self.source(), Source::Directory(_))
    }

    /// Dotted path as it appears in `synphot.toml` (e.g. `passband.johnson_v_file`).
    pub fn toml_path(self) -> String {
        format!("{}.{}", self.group().name(), self.name())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ConfigKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
