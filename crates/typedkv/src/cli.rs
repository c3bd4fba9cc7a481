//! Command-line runner
//!
//! | Command | Behavior |
//! |---------|----------|
//! | `get <key> [--json]` | Print the value; exit 1 without output when absent |
//! | `put <key> <value>` | Store text, with optional TTL, expiration and metadata |
//! | `delete <key>` | Remove the key (succeeds when already absent) |
//! | `list` | Print matching key names, one per line |
//!
//! Any taxonomy failure ends the process with a non-zero status.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use typedkv_application::{KvCapability, KvStore};
use typedkv_domain::value_objects::{GetOptions, ListOptions, PutOptions};
use typedkv_infrastructure::config::ConfigLoader;
use typedkv_infrastructure::di::init_app;
use typedkv_infrastructure::logging::init_logging;

/// Command line interface for typedkv
#[derive(Parser, Debug)]
#[command(name = "typedkv")]
#[command(about = "Typed key-value store client")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Key-value operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Read a value
    Get {
        /// Key to read
        key: String,
        /// Parse the stored value as JSON and pretty-print it
        #[arg(long)]
        json: bool,
    },
    /// Store a text value
    Put {
        /// Key to write
        key: String,
        /// Value to store
        value: String,
        /// Relative expiration in seconds
        #[arg(long)]
        ttl: Option<u64>,
        /// Absolute expiration as seconds since the Unix epoch
        #[arg(long)]
        expiration: Option<u64>,
        /// Metadata as a JSON document
        #[arg(long)]
        metadata: Option<String>,
    },
    /// Remove a key
    Delete {
        /// Key to remove
        key: String,
    },
    /// List keys
    List {
        /// Only keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
        /// Maximum keys per page
        #[arg(long)]
        limit: Option<usize>,
        /// Cursor returned by a previous call
        #[arg(long)]
        cursor: Option<String>,
        /// Follow cursors until every key is listed
        #[arg(long)]
        all: bool,
    },
}

/// How a successful command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked
    Done,
    /// `get` found no value
    Absent,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Absent => ExitCode::from(1),
        }
    }
}

/// Load configuration, bind the configured backend and run one command
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let context = init_app(config)?;
    info!(backend = context.binding().backend_name(), "running command");

    let stdout = std::io::stdout();
    let outcome = execute(&context.resolve_raw(), &cli.command, &mut stdout.lock()).await?;
    Ok(outcome.into())
}

/// Run one command against a raw facade, writing output to `out`
pub async fn execute<W: Write>(
    kv: &KvStore,
    command: &Command,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    match command {
        Command::Get { key, json: false } => {
            match kv.get(key, GetOptions::default()).await? {
                Some(value) => writeln!(out, "{}", value)?,
                None => return Ok(Outcome::Absent),
            }
        }
        Command::Get { key, json: true } => {
            match kv
                .get_json::<serde_json::Value>(key, GetOptions::default())
                .await?
            {
                Some(value) => writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?,
                None => return Ok(Outcome::Absent),
            }
        }
        Command::Put {
            key,
            value,
            ttl,
            expiration,
            metadata,
        } => {
            let mut options = PutOptions::new();
            options.expiration_ttl = *ttl;
            options.expiration = *expiration;
            if let Some(metadata) = metadata {
                let metadata = serde_json::from_str(metadata)
                    .context("--metadata must be a JSON document")?;
                options = options.with_metadata(metadata);
            }
            kv.put(key, value.as_str(), options).await?;
        }
        Command::Delete { key } => kv.delete(key).await?,
        Command::List {
            prefix,
            limit,
            cursor,
            all,
        } => {
            let options = ListOptions {
                prefix: prefix.clone(),
                limit: *limit,
                cursor: cursor.clone(),
            };
            if *all {
                for key in kv.list_all(options).await? {
                    writeln!(out, "{}", key.name)?;
                }
            } else {
                let page = kv.list(options).await?;
                for name in page.names() {
                    writeln!(out, "{}", name)?;
                }
                if let Some(cursor) = page.cursor.filter(|_| !page.list_complete) {
                    eprintln!("more keys available, continue with --cursor {}", cursor);
                }
            }
        }
    }
    Ok(Outcome::Done)
}
