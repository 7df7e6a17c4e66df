//! Commented `synphot.toml` template.
//!
//! Directory keys are written out with their defaults. File keys are
//! commented out so they keep following their directory; uncomment one to
//! pin that file elsewhere.

use super::{ConfigKey, Group, SynphotConfig};

/// Render the template for the built-in defaults.
pub fn template() -> String {
    let defaults = SynphotConfig::default();
    let mut out = String::new();

    out.push_str(&format!(
        "# synphot configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Values are remote URLs or local paths. A leading `~` is expanded.\n");

    for &group in Group::ALL {
        out.push('\n');
        out.push_str(&group_template(group, &defaults));
    }

    out
}

fn group_template(group: Group, defaults: &SynphotConfig) -> String {
    let mut out = format!("# {}\n[{}]\n", group.title(), group.name());

    for key in group.keys() {
        let value = toml::Value::String(defaults.default_value(key).to_string());
        out.push_str(&format!("# {}\n", key.description()));
        out.push_str(&field_line(key, &value));
    }

    out
}

fn field_line(key: ConfigKey, value: &toml::Value) -> String {
    match key.derivation() {
        None => format!("{} = {}\n", key.name(), value),
        Some((parent, _)) => format!("# {} = {}  # follows {}\n", key.name(), value, parent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed = crate::config::test_parse_config(&template());
        assert_eq!(parsed, SynphotConfig::default());
    }

    #[test]
    fn test_template_lists_every_key() {
        let out = template();
        for key in ConfigKey::ALL {
            assert!(out.contains(key.name()), "missing {}", key.name());
            assert!(out.contains(key.description()));
        }
        for group in Group::ALL {
            assert!(out.contains(&format!("[{}]", group.name())));
        }
    }

    #[test]
    fn test_file_keys_commented_out() {
        let out = template();
        assert!(out.contains("\nstdstar_dir = \"ftp://ftp.stsci.edu/cdbs/current_calspec/\"\n"));
        assert!(out.contains(
            "# vega_file = \"ftp://ftp.stsci.edu/cdbs/current_calspec/alpha_lyr_stis_005.fits\"  # follows stdstar_dir\n"
        ));
    }
}
