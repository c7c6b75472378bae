//! Change scope attributes, such as tenant or project, of a context.
use anyhow::Result;
use inquire::Text;

use crate::context::Context;
use crate::context::ContextStore;
use crate::Globals;

/// Change scope attributes of a context.
pub async fn run(globals: &Globals) -> Result<i32> {
    let store = ContextStore::load(globals).await?;
    let context = store.get_active(globals)?;

    // Lookup the current values as defaults (including CLI overrides).
    let tenant = context.tenant(&globals.cli.context).ok();
    let project = context.project(&globals.cli.context).ok();

    // Prompt the user for updates.
    let context = tokio::task::spawn_blocking(move || -> Result<Context> {
        let tenant = Text::new("Implicit tenant to use:")
            .with_initial_value(tenant.as_deref().unwrap_or(""))
            .with_placeholder("None selected")
            .prompt()?;
        let project = Text::new("Implicit project to use:")
            .with_initial_value(project.as_deref().unwrap_or(""))
            .with_placeholder("None selected")
            .prompt()?;

        let mut context = context;
        context.scope.tenant = match tenant {
            tenant if tenant.is_empty() => None,
            tenant => Some(tenant),
        };
        context.scope.project = match project {
            project if project.is_empty() => None,
            project => Some(project),
        };
        Ok(context)
    })
    .await??;

    // Save the changes.
    let name = store.active_id(globals).to_owned();
    let mut store = store;
    store.upsert(name, context);
    store.save(globals).await?;
    Ok(0)
}
