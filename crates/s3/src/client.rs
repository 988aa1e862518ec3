//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from ocp-core.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use futures::TryStreamExt;
use tokio_util::io::ReaderStream;

use ocp_core::{ByteReader, Error, ObjectStore, Result, StoreConfig};

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from a store configuration
    pub async fn new(config: StoreConfig) -> Result<Self> {
        let credentials = aws_credential_types::Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None, // session token
            None, // expiry
            "ocp-static-credentials",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(aws_config::Region::new(config.region.clone()))
            .endpoint_url(&config.endpoint)
            .load()
            .await;

        // Path-style addressing for MinIO and other S3-compatible backends
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.path_style)
            .build();

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

fn map_get_error(container: &str, key: &str, err: impl std::fmt::Display) -> Error {
    let err_str = err.to_string();
    if err_str.contains("NotFound") || err_str.contains("NoSuchKey") {
        Error::NotFound(format!("{container}/{key}"))
    } else {
        Error::Store(err_str)
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn get_object(&self, container: &str, key: &str) -> Result<(ByteReader, u64)> {
        let response = self
            .inner
            .get_object()
            .bucket(container)
            .key(key)
            .send()
            .await
            .map_err(|e| map_get_error(container, key, e))?;

        let length = response.content_length().unwrap_or(0).max(0) as u64;
        let reader = response.body.into_async_read();

        Ok((Box::pin(reader), length))
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        length: u64,
        body: ByteReader,
    ) -> Result<()> {
        // The store wants ownership of a readable stream of declared length.
        // Turn the reader into an http body the SDK can stream without
        // buffering the object.
        let frames = ReaderStream::new(body).map_ok(http_body::Frame::data);
        let stream = ByteStream::from_body_1_x(http_body_util::StreamBody::new(frames));

        self.inner
            .put_object()
            .bucket(container)
            .key(key)
            .content_length(length as i64)
            .body(stream)
            .send()
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("NoSuchBucket") {
                    Error::NotFound(container.to_string())
                } else {
                    Error::Store(err_str)
                }
            })?;

        tracing::debug!(container, key, length, "upload acknowledged");
        Ok(())
    }

    async fn list_containers(&self) -> Result<Vec<String>> {
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(|e| Error::Store(e.to_string()))?;

        Ok(response
            .buckets()
            .iter()
            .filter_map(|b| b.name().map(str::to_string))
            .collect())
    }

    async fn list_objects(&self, container: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut continuation_token: Option<String> = None;

        // The caller sees one complete result set; pagination stays in here.
        loop {
            let mut request = self.inner.list_objects_v2().bucket(container);
            if let Some(token) = &continuation_token {
                request = request.continuation_token(token);
            }

            let response = request.send().await.map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("NoSuchBucket") || err_str.contains("NotFound") {
                    Error::NotFound(container.to_string())
                } else {
                    Error::Store(err_str)
                }
            })?;

            names.extend(
                response
                    .contents()
                    .iter()
                    .filter_map(|o| o.key().map(str::to_string)),
            );

            if response.is_truncated().unwrap_or(false) {
                continuation_token = response.next_continuation_token().map(str::to_string);
                if continuation_token.is_none() {
                    break;
                }
            } else {
                break;
            }
        }

        Ok(names)
    }
}
