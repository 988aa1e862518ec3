//! ObjectStore trait definition
//!
//! This trait defines the interface for remote object-storage operations.
//! It allows the engine to be decoupled from the specific S3 SDK
//! implementation, and to be exercised against an in-memory fake in tests.

use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::error::Result;

/// A readable byte-stream endpoint
pub type ByteReader = Pin<Box<dyn AsyncRead + Send + Sync>>;

/// Trait for remote object-storage operations
///
/// The write path is deliberately an all-in-one "upload this reader of
/// declared length" call, matching how object stores expose uploads. The
/// bridge in this crate adapts it to an incremental writer.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Open a streaming read of an object, returning the body and its
    /// reported content length in bytes
    async fn get_object(&self, container: &str, key: &str) -> Result<(ByteReader, u64)>;

    /// Upload an object from a reader, with its total size declared up front
    async fn put_object(
        &self,
        container: &str,
        key: &str,
        length: u64,
        body: ByteReader,
    ) -> Result<()>;

    /// List container names, complete result set
    async fn list_containers(&self) -> Result<Vec<String>>;

    /// List object names within one container, fully materialized
    async fn list_objects(&self, container: &str) -> Result<Vec<String>>;
}
