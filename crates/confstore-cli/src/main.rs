//! confstore — command-line access to a JSON configuration file.
//!
//! # Usage
//!
//! ```text
//! confstore [OPTIONS] <COMMAND>
//!
//! Commands:
//!   get <KEY>                   Print the value stored under KEY
//!   exists <KEY>                Print whether KEY is stored
//!   set <KEY> <VALUE> [--force] Store VALUE under KEY (insert-only)
//!   delete <KEY>                Remove KEY
//!   list                        Print every key
//!   clear                       Remove every key
//!   dump                        Print the whole configuration
//!   import <SOURCE>             Replace the configuration with SOURCE
//!
//! Options:
//!   --file <PATH>   Configuration file [default: config.json]
//!   --pretty        Indent JSON output
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Default        | Description                    |
//! |--------------------|----------------|--------------------------------|
//! | `CONFSTORE_FILE`   | `config.json`  | Configuration file             |
//! | `CONFSTORE_PRETTY` | `false`        | Indent JSON output             |
//! | `RUST_LOG`         | `warn`         | Log filter (logs go to stderr) |

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use confstore_core::ConfigurationManager;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use confstore_cli::{execute, open_store, Command};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Read and edit a JSON key-value configuration file.
///
/// `set` never replaces an existing key unless `--force` is given.
#[derive(Debug, Parser)]
#[command(name = "confstore", version)]
struct Cli {
    /// Configuration file to operate on.  A missing file is treated as empty.
    #[arg(long, default_value = "config.json", env = "CONFSTORE_FILE")]
    file: PathBuf,

    /// Indent JSON printed by `get` and `dump`.
    #[arg(long, env = "CONFSTORE_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("running {:?} on {}", cli.command, cli.file.display());

    let mut store = open_store(&cli.file)
        .with_context(|| format!("failed to open {}", cli.file.display()))?;

    let outcome = execute(&mut store, &cli.command, cli.pretty)?;

    if outcome.changed {
        store
            .save()
            .with_context(|| format!("failed to save {}", cli.file.display()))?;
    }
    if let Some(output) = outcome.output {
        println!("{output}");
    }
    Ok(())
}
