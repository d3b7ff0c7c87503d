use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

mod cli;
mod entries;
mod render;
mod source;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::RootArgs::parse();
    tracing::info!(
        prefix = %args.prefix,
        description_only = args.description_only,
        "filtering options"
    );

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read rendered page from {}", path.display()))?,
        None => source::render_page(&args.page)?,
    };

    let parsed = entries::parse_entries(&text);
    let matched = entries::filter_by_prefix(parsed, &args.prefix);
    if matched.is_empty() {
        tracing::warn!(prefix = %args.prefix, "no options matched prefix");
    }

    let rendered = render::render(&matched, args.description_only);
    std::io::stdout()
        .write_all(rendered.as_bytes())
        .context("write rendered output")?;
    Ok(())
}
