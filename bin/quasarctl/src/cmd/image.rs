//! Inspect or manipulate machine images.
use anyhow::Context as _;
use anyhow::Result;
use clap::Args;
use clap::Parser;
use clap::Subcommand;

use crate::context::ContextStore;
use crate::formatter::ops::EntityOutcome;
use crate::formatter::ops::ImageListOp;
use crate::wait::task::await_task;
use crate::Globals;

/// Inspect or manipulate machine images.
#[derive(Debug, Parser)]
pub struct ImageCli {
    /// Select the `quasarctl image` command to run.
    #[command(subcommand)]
    pub command: ImageCmd,
}

/// Possible image commands to run.
#[derive(Debug, Subcommand)]
pub enum ImageCmd {
    /// Delete an image.
    Delete(ImageRef),

    /// List images known to the Control Plane.
    List,

    /// Lookup details for an image.
    Show(ImageRef),

    /// Upload a new image from a local file.
    #[command(alias = "create")]
    Upload(ImageUploadOpt),
}

/// Reference to a specific image.
#[derive(Debug, Args)]
pub struct ImageRef {
    /// Identifier of the image.
    pub image: String,
}

/// Options to upload an image with.
#[derive(Debug, Args)]
pub struct ImageUploadOpt {
    /// Path to the image file to upload.
    pub path: String,

    /// Name to register the image under, defaults to the file name.
    #[arg(long)]
    pub name: Option<String>,
}

/// Execute the selected `quasarctl image` command.
pub async fn run(globals: &Globals, cmd: &ImageCli) -> Result<i32> {
    match &cmd.command {
        ImageCmd::Delete(opt) => delete(globals, opt).await,
        ImageCmd::List => list(globals).await,
        ImageCmd::Show(opt) => show(globals, opt).await,
        ImageCmd::Upload(opt) => upload(globals, opt).await,
    }
}

async fn delete(globals: &Globals, opt: &ImageRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let task = client.image(&opt.image).delete().await?;
    await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "deleted",
        id: opt.image.clone(),
        kind: "Image",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}

async fn list(globals: &Globals) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let images = client.images().await?;
    let mut formatter = globals.formatter.format(globals, ImageListOp);
    for image in &images {
        formatter.append(image)?;
    }
    formatter.finish()?;
    Ok(0)
}

async fn show(globals: &Globals, opt: &ImageRef) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let image = client.image(&opt.image).get().await?;
    globals.formatter.format(globals, image)?;
    Ok(0)
}

async fn upload(globals: &Globals, opt: &ImageUploadOpt) -> Result<i32> {
    let context = ContextStore::active(globals).await?;
    let client = crate::client(&context).await?;

    let name = match &opt.name {
        Some(name) => name.clone(),
        None => std::path::Path::new(&opt.path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("unable to derive an image name from {}", opt.path))?,
    };
    let payload = tokio::fs::read(&opt.path)
        .await
        .with_context(|| format!("unable to read image file from {}", opt.path))?;

    let task = client.image_create(&name, payload).await?;
    let task = await_task(globals, &client, &task.id).await?;
    let outcome = EntityOutcome {
        action: "uploaded",
        id: task.entity.id,
        kind: "Image",
    };
    globals.formatter.format(globals, outcome)?;
    Ok(0)
}
