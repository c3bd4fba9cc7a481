//! typedkv - Entry Point
//!
//! Lives in the facade crate so the binary links every backend
//! registration.

// Force-link typedkv-providers so linkme registrations are included
extern crate typedkv_providers;

use clap::Parser;
use std::process::ExitCode;
use typedkv::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    run(cli).await
}
