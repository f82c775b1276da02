// Recording acquisition: local file, HTTP fetch, or the built-in demo

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::recording::Recording;

/// Where a recording comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
    Demo,
}

impl Source {
    /// Classify a command-line argument: http(s) schemes are fetched,
    /// everything else is treated as a filesystem path.
    pub fn parse(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            Self::Url(arg.to_string())
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Human-readable origin for the title bar and error messages.
    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
            Self::Demo => "built-in demo".to_string(),
        }
    }
}

/// Load and decode a recording. This happens once, before the UI starts;
/// a failure here aborts with the error instead of opening an empty viewer.
pub async fn load(source: &Source) -> Result<Recording> {
    let bytes = match source {
        Source::File(path) => read_file(path).await?,
        Source::Url(url) => fetch_url(url).await?,
        Source::Demo => return Ok(crate::demo::sample_recording()),
    };

    let recording = Recording::decode(&bytes)
        .with_context(|| format!("Invalid recording from {}", source.label()))?;

    tracing::info!(
        steps = recording.items.len(),
        matchers = recording.matchers.len(),
        "Loaded recording from {}",
        source.label()
    );

    Ok(recording)
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

async fn fetch_url(url: &str) -> Result<Vec<u8>> {
    // Recordings are small; a short timeout beats hanging the startup path.
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .context("Failed to create HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {url}"))?
        .error_for_status()
        .with_context(|| format!("Server returned an error for {url}"))?;

    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to read response body from {url}"))?;

    Ok(bytes.to_vec())
}
