//! `init` command: write a commented `synphot.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};
use synphot_config::{config::template, log};

/// Write the template to `path`, or print it when `dry_run` is set.
pub fn write_template(path: &Path, dry_run: bool, force: bool) -> Result<()> {
    if dry_run {
        print!("{}", template());
        return Ok(());
    }

    if path.exists() && !force {
        bail!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(path, template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
