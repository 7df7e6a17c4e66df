//! Key groups.
//!
//! Each group is one table in `synphot.toml` and owns exactly one directory
//! key that its file keys are derived from.
//!
//! | Group        | TOML table     | Directory key    |
//! |--------------|----------------|------------------|
//! | `stdstar`    | `[stdstar]`    | `stdstar_dir`    |
//! | `extinction` | `[extinction]` | `extinction_dir` |
//! | `passband`   | `[passband]`   | `passband_dir`   |

use super::{ConfigError, ConfigKey};
use serde::Serialize;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Standard star spectra
    Stdstar,
    /// Reddening/extinction laws
    Extinction,
    /// Common filter passbands
    Passband,
}

impl Group {
    pub const ALL: &'static [Group] = &[Self::Stdstar, Self::Extinction, Self::Passband];

    /// TOML table name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stdstar => "stdstar",
            Self::Extinction => "extinction",
            Self::Passband => "passband",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Stdstar => "Standard stars",
            Self::Extinction => "Reddening/extinction laws",
            Self::Passband => "Common filter passbands",
        }
    }

    /// The directory key every file key of this group is joined onto.
    pub const fn directory(self) -> ConfigKey {
        match self {
            Self::Stdstar => ConfigKey::StdstarDir,
            Self::Extinction => ConfigKey::ExtinctionDir,
            Self::Passband => ConfigKey::PassbandDir,
        }
    }

    /// Keys of this group in declaration order, directory first.
    pub fn keys(self) -> impl Iterator<Item = ConfigKey> {
        ConfigKey::ALL
            .iter()
            .copied()
            .filter(move |key| key.group() == self)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Group {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|group| group.name() == s)
            .ok_or_else(|| ConfigError::UnknownGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_partition_keys() {
        let total: usize = Group::ALL.iter().map(|g| g.keys().count()).sum();
        assert_eq!(total, ConfigKey::COUNT);

        assert_eq!(Group::Stdstar.keys().count(), 2);
        assert_eq!(Group::Extinction.keys().count(), 9);
        assert_eq!(Group::Passband.keys().count(), 13);
    }

    #[test]
    fn test_directory_listed_first() {
        for group in Group::ALL {
            assert_eq!(group.keys().next(), Some(group.directory()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("passband".parse::<Group>().unwrap(), Group::Passband);
        assert!(matches!(
            "filters".parse::<Group>(),
            Err(ConfigError::UnknownGroup(_))
        ));
    }
}
