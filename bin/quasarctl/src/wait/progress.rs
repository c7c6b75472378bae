//! Background renderer for wait-loop progress bars.
//!
//! The renderer runs as a tokio task and receives frames over a watch channel,
//! so the poll loop never blocks on terminal writes and only the latest frame
//! is ever drawn.
use std::io::Write;
use std::time::Duration;

use anyhow::Context as _;
use anyhow::Result;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::render_bar;

const REDRAW_INTERVAL: Duration = Duration::from_millis(500);

/// Snapshot of wait progress to draw on the terminal.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    /// Number of filled slots in the progress bar.
    pub cursor: usize,

    /// Short description of the awaited operation.
    pub label: String,

    /// State string reported by the server.
    pub state: String,

    /// Number of steps the operation is made of.
    pub steps: usize,
}

enum Signal {
    Draw(Frame),
    Stop,
}

/// Handle to the background progress renderer.
///
/// The renderer keeps redrawing the latest frame until [`Progress::finish`] is
/// called, which stops the task and clears the progress line. Dropping the
/// handle without calling `finish` aborts the renderer without cleanup.
pub struct Progress {
    handle: JoinHandle<()>,
    updates: watch::Sender<Signal>,
}

impl Progress {
    /// Spawn the background renderer, initially drawing nothing.
    pub fn start() -> Progress {
        let (updates, frames) = watch::channel(Signal::Draw(Frame::default()));
        let handle = tokio::spawn(render(frames));
        Progress { handle, updates }
    }

    /// Publish a new frame for the renderer to draw.
    pub fn update(&self, frame: Frame) {
        // The renderer outlives every update call, ignore send errors anyway.
        let _ = self.updates.send(Signal::Draw(frame));
    }

    /// Stop the renderer and wait for it to clear the progress line.
    ///
    /// Waits are expected to call this exactly once, after the terminal state
    /// is known and before any result or error is reported.
    pub async fn finish(self) -> Result<()> {
        let _ = self.updates.send(Signal::Stop);
        self.handle
            .await
            .context("progress renderer task failed to stop")
    }
}

async fn render(mut frames: watch::Receiver<Signal>) {
    let mut interval = tokio::time::interval(REDRAW_INTERVAL);
    let mut width = 0;
    loop {
        tokio::select! {
            _ = interval.tick() => (),
            changed = frames.changed() => {
                // The sender half lives in Progress so a closed channel
                // means the handle was dropped without finish.
                if changed.is_err() {
                    break;
                }
            }
        }
        let frame = match &*frames.borrow_and_update() {
            Signal::Draw(frame) => frame.clone(),
            Signal::Stop => break,
        };
        width = draw(&frame, width);
    }
    clear(width);
}

/// Draw a frame on stderr, padding over the previous one, and return its width.
fn draw(frame: &Frame, previous_width: usize) -> usize {
    if frame.label.is_empty() {
        return previous_width;
    }
    let bar = render_bar(frame.steps, frame.cursor);
    let line = format!("{} [{}] {}", frame.label, bar, frame.state);
    let width = line.chars().count();
    let padding = previous_width.saturating_sub(width);
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "\r{}{}", line, " ".repeat(padding));
    let _ = stderr.flush();
    width
}

/// Blank out the progress line so reports start on a clean line.
fn clear(width: usize) {
    if width == 0 {
        return;
    }
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, "\r{}\r", " ".repeat(width));
    let _ = stderr.flush();
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use super::Progress;

    #[tokio::test]
    async fn finish_joins_renderer() {
        let progress = Progress::start();
        progress.update(Frame {
            cursor: 1,
            label: "Creating vm 'vm-1'".to_string(),
            state: "STARTED".to_string(),
            steps: 3,
        });
        progress.finish().await.expect("renderer to stop cleanly");
    }

    #[tokio::test]
    async fn finish_without_updates() {
        let progress = Progress::start();
        progress.finish().await.expect("renderer to stop cleanly");
    }

    #[tokio::test]
    async fn finish_surfaces_renderer_join_errors() {
        let progress = Progress::start();
        progress.handle.abort();
        let error = progress.finish().await.expect_err("a join error");
        assert!(error.to_string().contains("progress renderer task failed to stop"));
    }
}
