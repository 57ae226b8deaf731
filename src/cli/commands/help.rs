//! suggest / commands - Discoverability helpers

use anyhow::Result;

use crate::cli::Context;
use crate::core::state::RepoState;
use crate::engine;
use crate::ui::output;

/// Print suggestions for `partial` against a fresh repository.
pub fn suggest(ctx: &Context, partial: &str) -> Result<()> {
    let loaded = ctx.load_config()?;
    let state = RepoState::new(&loaded.config);

    for line in engine::suggest(partial, &state) {
        println!("{}", line);
    }
    Ok(())
}

/// Print the supported command catalog.
pub fn commands(ctx: &Context) -> Result<()> {
    output::print(output::render_catalog(), ctx.verbosity());
    Ok(())
}
