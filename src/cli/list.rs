//! `list` and `get` commands.

use anyhow::Result;
use owo_colors::{OwoColorize, Stream};
use synphot_config::config::{ConfigEntry, ConfigKey, Group, SynphotConfig};

/// Print entries as an aligned table, or as JSON.
pub fn list_entries(
    config: &SynphotConfig,
    group: Option<Group>,
    modified_only: bool,
    json: bool,
) -> Result<()> {
    let entries: Vec<_> = config
        .entries()
        .filter(|e| group.is_none_or(|g| e.group == g))
        .filter(|e| !modified_only || e.is_modified())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    print!("{}", render_table(&entries));
    Ok(())
}

/// Print one value with no decoration, for use in scripts.
pub fn print_value(config: &SynphotConfig, key: ConfigKey, default: bool) {
    if default {
        println!("{}", config.default_value(key));
    } else {
        println!("{}", config.get(key));
    }
}

fn render_table(entries: &[ConfigEntry<'_>]) -> String {
    let width = entries
        .iter()
        .map(|e| e.key.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let mut current_group = None;
    for entry in entries {
        if current_group != Some(entry.group) {
            if current_group.is_some() {
                out.push('\n');
            }
            current_group = Some(entry.group);
            let header = format!("[{}]", entry.group);
            out.push_str(&format!(
                "{}  {}\n",
                header.if_supports_color(Stream::Stdout, |h| h.bold()),
                entry
                    .group
                    .title()
                    .if_supports_color(Stream::Stdout, |t| t.dimmed())
            ));
        }

        let marker = if entry.is_modified() { "*" } else { " " };
        out.push_str(&format!(
            "{} {:<width$}  {}  ({})\n",
            marker.if_supports_color(Stream::Stdout, |m| m.yellow()),
            entry.key.name(),
            entry.current_value,
            entry.kind.as_str()
        ));
    }
    out
}
