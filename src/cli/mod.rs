//! Command-line interface module.

mod args;
mod edit;
mod init;
mod list;

pub use args::{Cli, Commands};

use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use synphot_config::config::{SynphotConfig, find_config_file, init_config};

/// Run the parsed command.
pub fn run(cli: &Cli) -> Result<()> {
    let load = || -> Result<Arc<SynphotConfig>> {
        let config = SynphotConfig::load(&cli.config)
            .with_context(|| format!("Failed to load '{}'", cli.config.display()))?;
        Ok(init_config(config))
    };

    match &cli.command {
        Commands::Init { dry, force } => init::write_template(&cli.config, *dry, *force),
        Commands::List {
            group,
            modified,
            json,
        } => {
            let config = load()?;
            list::list_entries(&config, *group, *modified, *json)
        }
        Commands::Get { key, default } => {
            let config = load()?;
            list::print_value(&config, *key, *default);
            Ok(())
        }
        Commands::Set {
            key,
            value,
            refresh,
        } => edit::set_value(&resolve_config_path(&cli.config)?, *key, value, *refresh),
        Commands::Unset { key } => edit::unset_value(&resolve_config_path(&cli.config)?, *key),
        Commands::Refresh { write } => {
            let config = load()?;
            edit::refresh(&config, &resolve_config_path(&cli.config)?, *write)
        }
    }
}

/// Existing config file found upward from cwd, or `cwd/<name>` for a new one.
fn resolve_config_path(name: &Path) -> Result<PathBuf> {
    if let Some(path) = find_config_file(name) {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    Ok(cwd.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use synphot_config::config::{ConfigKey, cfg};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_run_loaded_commands_install_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");
        fs::write(&path, "[stdstar]\nstdstar_dir = \"/run/calspec/\"\n").unwrap();
        let config = path.to_str().unwrap();

        run(&parse(&["synphot-config", "-C", config, "get", "vega_file"])).unwrap();
        assert_eq!(
            cfg().get(ConfigKey::VegaFile),
            "/run/calspec/alpha_lyr_stis_005.fits"
        );

        run(&parse(&["synphot-config", "-C", config, "list", "--json"])).unwrap();
        run(&parse(&["synphot-config", "-C", config, "refresh"])).unwrap();
        assert_eq!(cfg().config_path(), Some(path.as_path()));
    }

    #[test]
    fn test_resolve_config_path_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("synphot.toml");

        // A missing absolute path is used as-is for a new file
        assert_eq!(resolve_config_path(&path).unwrap(), path);

        fs::write(&path, "").unwrap();
        assert_eq!(resolve_config_path(&path).unwrap(), path);
    }
}
