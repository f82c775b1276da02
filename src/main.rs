// retrace - Replay viewer for recorded pattern-match traces
//
// A pattern-match engine can record its scan as a sequence of steps: the
// cursor position plus the input range each sub-matcher claims. This tool
// loads such a recording and lets you scrub through the steps.
//
// Architecture:
// - Loader: fetches and decodes the recording (file, HTTP, or bundled demo)
// - Replay engine: pure per-step frame computation over the recording
// - TUI (ratatui): input strip with claim colors, legend, scrub bar
// - Logging: tracing events captured in memory for the logs panel

mod cli;
mod demo;
mod loader;
mod logging;
mod recording;
mod replay;
mod tui;

use anyhow::Result;
use clap::Parser;
use logging::LogBuffer;
use replay::ReplaySession;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let source = args.recording_source();

    // TUI mode captures logs in memory; dump mode writes them to stderr so
    // stdout carries only the dumped frame.
    let log_buffer = LogBuffer::new();
    logging::init(!args.dump, &log_buffer);

    let recording = loader::load(&source).await?;

    let mut session = ReplaySession::new(recording);
    if let Some(step) = args.step {
        session.set_step(step);
    }

    if args.dump {
        print!("{}", session.frame().to_text());
        return Ok(());
    }

    tracing::info!("Starting TUI");
    tui::run_tui(session, source.label(), log_buffer).await
}
