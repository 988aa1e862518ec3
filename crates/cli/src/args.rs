//! Argument surface and mode selection
//!
//! The list/copy selector is parsed once into an explicit [`Mode`] that is
//! handed to the engine; nothing downstream inspects flag state.

use clap::Parser;
use thiserror::Error;

use ocp_core::{resolve, Location, TransferSpec, REMOTE_PREFIX};

/// ocp - streaming object-storage copy
///
/// Copies single named items between the local filesystem and an
/// S3-compatible object store. Remote locations use the `a:container/key`
/// form; any other path is local.
#[derive(Parser, Debug)]
#[command(name = "ocp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// List objects in the named container, or containers if '-' is given
    #[arg(short = 'l', long = "list", value_name = "CONTAINER")]
    pub list: Option<String>,

    /// Output format: human-readable or JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,

    /// Copy mode paths: SRC... DST (last is the destination)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,
}

/// What one invocation does, derived from the parsed arguments
#[derive(Debug)]
pub enum Mode {
    /// Copy every source to the destination
    Copy(TransferSpec),
    /// List container names
    ListContainers,
    /// List object names within one container
    ListObjects(String),
}

/// Why arguments could not be turned into a mode
#[derive(Debug, Error)]
pub enum ArgsError {
    /// Copy mode needs at least one source and a destination
    #[error("copy mode requires at least 2 paths: [{REMOTE_PREFIX}container/]src... [{REMOTE_PREFIX}container/]dst")]
    MissingPaths,

    /// A path string failed to resolve
    #[error(transparent)]
    Resolution(#[from] ocp_core::Error),
}

impl Mode {
    /// Derive the execution mode from parsed arguments
    pub fn from_cli(cli: &Cli) -> Result<Self, ArgsError> {
        match cli.list.as_deref() {
            Some("-") => Ok(Mode::ListContainers),
            Some(container) => Ok(Mode::ListObjects(container.to_string())),
            None => {
                if cli.paths.len() < 2 {
                    return Err(ArgsError::MissingPaths);
                }

                let mut locations = cli
                    .paths
                    .iter()
                    .map(|p| resolve(p))
                    .collect::<ocp_core::Result<Vec<Location>>>()?;
                let dest = locations.pop().expect("length checked above");

                Ok(Mode::Copy(TransferSpec::new(locations, dest)?))
            }
        }
    }
}
