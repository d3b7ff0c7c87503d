//! Documentation source collaborator: the system `man` renderer.
//!
//! The extractor treats `man` as an opaque text producer. The environment is
//! scrubbed before invocation so the rendering is deterministic across
//! machines and terminals; only `PATH` passes through so `man` itself and its
//! formatter pipeline can be found.
use anyhow::{anyhow, Context, Result};
use std::ffi::OsString;
use std::process::Command;

/// Render `page` to plain text via the system `man` program.
///
/// Fails when `man` cannot be spawned, exits non-zero, or produces an empty
/// rendering (a missing page on some platforms).
pub fn render_page(page: &str) -> Result<String> {
    let path = std::env::var_os("PATH").unwrap_or_else(OsString::new);
    let output = Command::new("man")
        .arg(page)
        .env_clear()
        .env("PATH", path)
        .env("LC_ALL", "C")
        .env("TERM", "dumb")
        .env("MANWIDTH", "80")
        .env("MANPAGER", "cat")
        .env("PAGER", "cat")
        .output()
        .with_context(|| format!("spawn man for page {page}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "man could not render page {page}: exit={:?}, stderr={}",
            output.status.code(),
            stderr.trim()
        ));
    }

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    if text.trim().is_empty() {
        return Err(anyhow!("man produced an empty rendering for page {page}"));
    }
    tracing::debug!(page, bytes = text.len(), "rendered manual page");
    Ok(text)
}
