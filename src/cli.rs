//! CLI argument parsing for the option filter.
//!
//! The CLI is intentionally thin: it builds one immutable query from argv and
//! hands everything else to the extractor, so the same core logic can be
//! reused elsewhere.
use clap::Parser;
use std::path::PathBuf;

/// Manual page rendered by default when `--page` is not given.
pub const DEFAULT_PAGE: &str = "configuration.nix";

/// Root CLI entrypoint for the option filter.
#[derive(Parser, Debug)]
#[command(
    name = "optman",
    version,
    about = "Filter NixOS configuration.nix options by dotted-name prefix",
    after_help = "Examples:\n  optman services.nginx\n  optman -d virtualisation.virtualbox.host.enable\n  optman --input rendered.txt networking.firewall"
)]
pub struct RootArgs {
    /// Option name prefix to filter by (empty string matches every option)
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Show only option names and descriptions
    #[arg(short = 'd', long)]
    pub description_only: bool,

    /// Manual page to render for option entries
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PAGE)]
    pub page: String,

    /// Read an already-rendered page from a file instead of invoking man
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}
