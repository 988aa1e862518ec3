//! ocp - streaming object-storage copy
//!
//! Copies byte streams between the local filesystem and an S3-compatible
//! object store, and lists containers/objects. Remote locations are written
//! as `a:container/key`; anything else is a local path.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;
mod exit_code;
mod output;
mod run;

use args::Cli;

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let exit_code = run::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}
