use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Writes the fully rendered plan to `destination`, or to stdout when no
/// destination is given. The document is rendered before this is called, so
/// a failure here leaves no partial plan behind.
pub fn write_plan(document: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            fs::write(path, document)
                .with_context(|| format!("Failed to write plan to '{}'", path.display()))?;
            info!("Wrote assignment plan to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.write_all(b"\n"))
                .context("Failed to write plan to stdout")?;
        }
    }
    Ok(())
}
