//! Transfer engine and listing service
//!
//! The engine copies N sources into one destination through a single uniform
//! code path: resolve a reader plus size for the source, resolve a writer for
//! the destination using that size, run a stream-to-stream byte copy, then
//! close both ends. Sources are processed sequentially and independently;
//! one source failing never aborts its siblings.

use std::sync::Arc;

use tokio::io::AsyncWriteExt;

use crate::bridge::Bridge;
use crate::error::{Error, Result, Side};
use crate::location::Location;
use crate::store::{ByteReader, ObjectStore};

/// An ordered batch of sources feeding one destination
#[derive(Debug, Clone)]
pub struct TransferSpec {
    /// Sources, copied in order
    pub sources: Vec<Location>,
    /// Destination, fixed for the whole batch
    pub dest: Location,
}

impl TransferSpec {
    /// Build a spec; at least one source is required
    pub fn new(sources: Vec<Location>, dest: Location) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::Resolution("at least one source is required".into()));
        }
        Ok(Self { sources, dest })
    }
}

/// Per-source result of one batch
#[derive(Debug)]
pub struct TransferOutcome {
    /// The source this outcome belongs to
    pub source: Location,
    /// Bytes copied on success
    pub result: Result<u64>,
}

/// Destination endpoint for one copy
///
/// Local destinations are plain files; remote destinations go through the
/// bridge so the upload acknowledgment can be joined after the copy loop.
enum Sink {
    Local(tokio::fs::File),
    Remote(Bridge),
}

/// The streaming transfer engine
///
/// Holds the store client behind the [`ObjectStore`] trait so the engine can
/// run against any backend, including an in-memory fake in tests.
pub struct Engine {
    store: Arc<dyn ObjectStore>,
}

impl Engine {
    /// Create an engine over the given store client
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// Copy every source in the spec to its destination, sequentially
    ///
    /// Each source opens, uses, and closes its own reader/writer pair. A
    /// failed source is recorded in its outcome and logged; the batch
    /// continues with the next source.
    pub async fn copy_all(&self, spec: &TransferSpec) -> Vec<TransferOutcome> {
        let mut outcomes = Vec::with_capacity(spec.sources.len());

        for source in &spec.sources {
            let result = self.copy_one(source, &spec.dest).await;
            if let Err(err) = &result {
                tracing::warn!(source = %source, dest = %spec.dest, error = %err, "transfer failed");
            }
            outcomes.push(TransferOutcome {
                source: source.clone(),
                result,
            });
        }

        outcomes
    }

    /// Copy one source to one destination, returning the bytes copied
    ///
    /// The copy has no framing and no resumability; a failed transfer
    /// restarts from byte zero.
    pub async fn copy_one(&self, src: &Location, dst: &Location) -> Result<u64> {
        let (mut reader, length) = self.open_read(src).await?;
        let sink = self.open_write(dst, length).await?;

        match sink {
            Sink::Local(mut file) => {
                let copied = tokio::io::copy(&mut reader, &mut file)
                    .await
                    .map_err(|e| Error::Transfer(e.to_string()))?;
                file.shutdown()
                    .await
                    .map_err(|e| Error::Transfer(e.to_string()))?;
                Ok(copied)
            }
            Sink::Remote(mut bridge) => {
                let copied = tokio::io::copy(&mut reader, bridge.writer())
                    .await
                    .map_err(|e| Error::Transfer(e.to_string()))?;
                // Joins the upload task; success here means the store
                // acknowledged the object.
                bridge.finish().await?;
                Ok(copied)
            }
        }
    }

    /// List container names in the store
    pub async fn list_containers(&self) -> Result<Vec<String>> {
        self.store.list_containers().await
    }

    /// List object names within one container
    pub async fn list_objects(&self, container: &str) -> Result<Vec<String>> {
        self.store.list_objects(container).await
    }

    /// Open a source for reading, returning the stream and its size
    async fn open_read(&self, location: &Location) -> Result<(ByteReader, u64)> {
        match location {
            Location::Local(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| Error::open(Side::Source, location, e))?;
                let length = file
                    .metadata()
                    .await
                    .map_err(|e| Error::open(Side::Source, location, e))?
                    .len();
                Ok((Box::pin(file), length))
            }
            Location::Remote { container, key } => self
                .store
                .get_object(container, key)
                .await
                .map_err(|e| Error::open(Side::Source, location, e)),
        }
    }

    /// Open a destination for writing
    ///
    /// `length` is the source's size. The local filesystem ignores it; the
    /// remote store requires it declared up front.
    async fn open_write(&self, location: &Location, length: u64) -> Result<Sink> {
        match location {
            Location::Local(path) => {
                let file = tokio::fs::File::create(path)
                    .await
                    .map_err(|e| Error::open(Side::Destination, location, e))?;
                Ok(Sink::Local(file))
            }
            Location::Remote { container, key } => {
                if key.is_empty() {
                    return Err(Error::open(
                        Side::Destination,
                        location,
                        "object key is empty",
                    ));
                }
                Ok(Sink::Remote(Bridge::open(
                    self.store.clone(),
                    container,
                    key,
                    length,
                )))
            }
        }
    }
}
