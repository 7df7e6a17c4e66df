//! Configuration utility functions.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Join a filename onto a directory value.
///
/// Works on plain strings so URLs and local paths behave the same:
/// - empty `dir` yields `name`
/// - `dir` ending in `/` is concatenated directly
/// - otherwise a `/` separator is inserted
///
/// # Examples
/// ```ignore
/// join_path("ftp://ftp.stsci.edu/cdbs/extinction/", "smc_bar_001.fits")
///     -> "ftp://ftp.stsci.edu/cdbs/extinction/smc_bar_001.fits"
/// join_path("/local/calspec", "alpha_lyr_stis_005.fits")
///     -> "/local/calspec/alpha_lyr_stis_005.fits"
/// ```
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() || dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Expand a leading `~` to the home directory.
///
/// Only applied to values read from `synphot.toml`; values set through the
/// API are stored verbatim.
pub fn expand_tilde(value: &str) -> String {
    shellexpand::tilde(value).into_owned()
}

/// Whether a configured value points at a remote archive or the local disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Remote,
    Local,
}

impl ValueKind {
    /// Classify a value by its URL scheme.
    ///
    /// Single-letter schemes are treated as Windows drive letters, not URLs.
    pub fn of(value: &str) -> Self {
        match url::Url::parse(value) {
            Ok(url) if url.scheme().len() > 1 && url.scheme() != "file" => Self::Remote,
            _ => Self::Local,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/obs/night1/reduced/  ← cwd
/// /home/user/obs/synphot.toml     ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_join_path() {
        assert_eq!(
            join_path("ftp://archive/current_calspec/", "alpha_lyr_stis_005.fits"),
            "ftp://archive/current_calspec/alpha_lyr_stis_005.fits"
        );
        assert_eq!(
            join_path("/local/calspec", "alpha_lyr_stis_005.fits"),
            "/local/calspec/alpha_lyr_stis_005.fits"
        );
        assert_eq!(join_path("", "smc_bar_001.fits"), "smc_bar_001.fits");
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(
            ValueKind::of("ftp://ftp.stsci.edu/cdbs/extinction/"),
            ValueKind::Remote
        );
        assert_eq!(ValueKind::of("https://example.org/x.fits"), ValueKind::Remote);
        assert_eq!(ValueKind::of("/data/cdbs/comp/"), ValueKind::Local);
        assert_eq!(ValueKind::of("relative/dir/"), ValueKind::Local);
        assert_eq!(ValueKind::of("C:\\cdbs\\extinction\\"), ValueKind::Local);
        assert_eq!(ValueKind::of("file:///data/cdbs/"), ValueKind::Local);
    }

    #[test]
    fn test_expand_tilde_leaves_plain_values() {
        assert_eq!(expand_tilde("/data/cdbs/"), "/data/cdbs/");
        assert_eq!(expand_tilde("ftp://host/~user/"), "ftp://host/~user/");
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join("synphot.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("synphot.toml")).unwrap();
        assert_eq!(found, temp.path().join("synphot.toml"));
    }

    #[test]
    fn test_find_config_file_absolute_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(find_config_file_from(temp.path(), &missing).is_none());
    }
}
