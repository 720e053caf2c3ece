//! AWS S3 backend.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use opendal::{Operator, services};
use relay_shared::S3Settings;
use tracing::{debug, error, info};

use super::backend::Storage;
use super::error::StorageError;

const PROVIDER: &str = "s3";

/// The one S3 call the adapter needs.
pub trait PutObject: Send + Sync {
    /// Create or replace `key` in `bucket` with `body`.
    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
    ) -> impl Future<Output = opendal::Result<()>> + Send;
}

/// S3 client backed by OpenDAL.
///
/// OpenDAL binds an operator to a single bucket, so the client keeps one per
/// bucket, built on first use and shared by clones. Credentials and region
/// not set explicitly are picked up from the ambient AWS environment.
#[derive(Debug, Clone, Default)]
pub struct S3Client {
    settings: S3Settings,
    operators: Arc<DashMap<String, Operator>>,
}

impl S3Client {
    /// Create a client from settings.
    #[must_use]
    pub fn new(settings: S3Settings) -> Self {
        Self {
            settings,
            operators: Arc::new(DashMap::new()),
        }
    }

    fn operator(&self, bucket: &str) -> opendal::Result<Operator> {
        if let Some(op) = self.operators.get(bucket) {
            return Ok(op.clone());
        }

        let op = self
            .operators
            .entry(bucket.to_string())
            .or_try_insert_with(|| self.build_operator(bucket))?
            .clone();
        debug!(bucket = %bucket, "created s3 operator");
        Ok(op)
    }

    fn build_operator(&self, bucket: &str) -> opendal::Result<Operator> {
        let mut builder = services::S3::default().bucket(bucket);
        if let Some(region) = &self.settings.region {
            builder = builder.region(region);
        }
        if let Some(endpoint) = &self.settings.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(key_id) = &self.settings.access_key_id {
            builder = builder.access_key_id(key_id);
        }
        if let Some(secret) = &self.settings.secret_access_key {
            builder = builder.secret_access_key(secret);
        }

        Ok(Operator::new(builder)?.finish())
    }
}

impl PutObject for S3Client {
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> opendal::Result<()> {
        self.operator(bucket)?.write(key, body).await?;
        Ok(())
    }
}

/// [`Storage`] over S3 `PutObject`.
#[derive(Debug, Clone)]
pub struct S3Storage<C = S3Client> {
    client: C,
}

impl<C: PutObject> S3Storage<C> {
    /// Wrap an S3 client.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: PutObject> Storage for S3Storage<C> {
    type Error = StorageError;

    async fn save_file(&self, container: &str, name: &str, data: &str) -> Result<(), StorageError> {
        info!(name = %name, container = %container, "uploading object");

        self.client
            .put_object(container, name, Bytes::copy_from_slice(data.as_bytes()))
            .await
            .map_err(|e| {
                error!(error = %e, container = %container, name = %name, "failed to save file");
                StorageError::from_client(PROVIDER, container, name, e)
            })
    }
}
