//! Show details about the current `quasarctl` context.
use anyhow::Result;

use crate::context::ContextStore;
use crate::Globals;

/// Show details about the current `quasarctl` context.
pub async fn run(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    globals.formatter.format(globals, context)?;
    Ok(0)
}
