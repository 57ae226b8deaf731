//! config command - Show or create the configuration file

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::Config;
use crate::ui::output;

/// Print the effective configuration as TOML.
pub fn show(ctx: &Context) -> Result<()> {
    let loaded = ctx.load_config()?;

    match &loaded.path {
        Some(path) => output::print(format!("# {}", path.display()), ctx.verbosity()),
        None => output::print("# built-in defaults", ctx.verbosity()),
    }

    let text = toml::to_string_pretty(&loaded.config.effective())
        .context("Failed to serialize config")?;
    print!("{}", text);
    Ok(())
}

/// Write the defaults to `--config` or `~/.gitsim/config.toml`.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = match &ctx.config_path {
        Some(path) => path.clone(),
        None => Config::default_path().context("Failed to locate config directory")?,
    };

    Config::write_defaults(&path, force)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    output::print(format!("Wrote {}", path.display()), ctx.verbosity());
    Ok(())
}
