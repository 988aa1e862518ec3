//! Stream bridge
//!
//! The remote store's write path is an all-in-one "upload this reader of
//! declared length" call; it does not accept incremental writes. The bridge
//! reconciles that with the engine's push-style copy loop: it allocates a
//! bounded in-process pipe, hands the write half to the copy loop, and
//! spawns a task that drains the read half into the store's upload call.
//! Backpressure from the pipe throttles the copy loop to the speed the
//! upload can drain it.

use std::sync::Arc;

use tokio::io::{duplex, AsyncWriteExt, DuplexStream};
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::store::ObjectStore;

/// Internal pipe buffer size in bytes
const PIPE_CAPACITY: usize = 64 * 1024;

/// A pipe-based adapter feeding one declared-length upload
///
/// Owned jointly by the copy loop (which writes) and the upload task (which
/// reads). The upload result is not fire-and-forget: [`Bridge::finish`]
/// joins the task, so a transfer only counts as done once the store has
/// acknowledged the upload.
pub struct Bridge {
    writer: DuplexStream,
    upload: JoinHandle<Result<()>>,
}

impl Bridge {
    /// Allocate the pipe and spawn the upload task for (container, key)
    ///
    /// `length` is the total upload size, declared up front as the store
    /// requires.
    pub fn open(store: Arc<dyn ObjectStore>, container: &str, key: &str, length: u64) -> Self {
        let (writer, reader) = duplex(PIPE_CAPACITY);
        let container = container.to_string();
        let key = key.to_string();

        let upload = tokio::spawn(async move {
            store
                .put_object(&container, &key, length, Box::pin(reader))
                .await
        });

        Self { writer, upload }
    }

    /// The write half of the pipe, fed by the generic copy loop
    pub fn writer(&mut self) -> &mut DuplexStream {
        &mut self.writer
    }

    /// Close the write half and wait for the upload to be acknowledged
    ///
    /// Shutting down the writer delivers end-of-stream to the upload task;
    /// its result is folded into this call's return value.
    pub async fn finish(mut self) -> Result<()> {
        self.writer
            .shutdown()
            .await
            .map_err(|e| Error::Transfer(e.to_string()))?;
        drop(self.writer);

        match self.upload.await {
            Ok(result) => result.map_err(|e| Error::Upload(e.to_string())),
            Err(e) => Err(Error::Upload(format!("upload task panicked: {e}"))),
        }
    }
}
