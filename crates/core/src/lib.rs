//! ocp-core: Core library for the ocp object-storage CLI
//!
//! This crate provides the core functionality for the ocp CLI, including:
//! - Location resolution (local path vs remote object reference)
//! - The ObjectStore trait for remote storage operations
//! - The stream bridge adapting declared-length uploads to a copy loop
//! - The transfer engine and listing service
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing for easy testing and potential future support for other backends.

pub mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod location;
pub mod store;

pub use bridge::Bridge;
pub use config::StoreConfig;
pub use engine::{Engine, TransferOutcome, TransferSpec};
pub use error::{Error, Result};
pub use location::{resolve, Location, REMOTE_PREFIX};
pub use store::{ByteReader, ObjectStore};
