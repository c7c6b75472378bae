//! Remove the selected context configuration.
use anyhow::Result;
use inquire::Confirm;

use crate::context::ContextStore;
use crate::Globals;

/// Remove the selected context configuration.
pub async fn run(globals: &Globals) -> Result<i32> {
    let mut store = ContextStore::load(globals).await?;
    let active = store.active_id(globals).to_owned();
    let prompt = format!("Deleting context {active}, can't be undone");
    let confirm = tokio::task::spawn_blocking(move || {
        Confirm::new(&prompt).with_default(false).prompt()
    })
    .await??;

    if confirm {
        store.remove(&active);
        store.save(globals).await?;
        println!("Context {active} was deleted")
    }
    Ok(0)
}
