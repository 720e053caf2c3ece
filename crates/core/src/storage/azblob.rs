//! Azure Blob Storage backend.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use dashmap::DashMap;
use opendal::{Operator, services};
use relay_shared::AzureBlobSettings;
use tracing::{debug, error, info};

use super::backend::Storage;
use super::error::StorageError;

const PROVIDER: &str = "azure_blob";

/// The one Blob Storage call the adapter needs.
pub trait UploadBuffer: Send + Sync {
    /// Create or replace block blob `blob` in `container` with `buffer`.
    fn upload_buffer(
        &self,
        container: &str,
        blob: &str,
        buffer: Bytes,
    ) -> impl Future<Output = opendal::Result<()>> + Send;
}

/// Blob Storage client backed by OpenDAL, one cached operator per container.
#[derive(Debug, Clone)]
pub struct AzureBlobClient {
    settings: AzureBlobSettings,
    operators: Arc<DashMap<String, Operator>>,
}

impl AzureBlobClient {
    /// Create a client from settings.
    #[must_use]
    pub fn new(settings: AzureBlobSettings) -> Self {
        Self {
            settings,
            operators: Arc::new(DashMap::new()),
        }
    }

    fn operator(&self, container: &str) -> opendal::Result<Operator> {
        if let Some(op) = self.operators.get(container) {
            return Ok(op.clone());
        }

        let op = self
            .operators
            .entry(container.to_string())
            .or_try_insert_with(|| self.build_operator(container))?
            .clone();
        debug!(container = %container, "created azure blob operator");
        Ok(op)
    }

    fn build_operator(&self, container: &str) -> opendal::Result<Operator> {
        let mut builder = services::Azblob::default()
            .container(container)
            .endpoint(&self.settings.endpoint())
            .account_name(&self.settings.account);
        if let Some(key) = &self.settings.access_key {
            builder = builder.account_key(key);
        } else if let Some(sas) = &self.settings.sas_token {
            builder = builder.sas_token(sas);
        }

        Ok(Operator::new(builder)?.finish())
    }
}

impl UploadBuffer for AzureBlobClient {
    async fn upload_buffer(&self, container: &str, blob: &str, buffer: Bytes) -> opendal::Result<()> {
        self.operator(container)?.write(blob, buffer).await?;
        Ok(())
    }
}

/// [`Storage`] over Blob Storage block uploads.
#[derive(Debug, Clone)]
pub struct AzureBlobStorage<C = AzureBlobClient> {
    client: C,
}

impl<C: UploadBuffer> AzureBlobStorage<C> {
    /// Wrap a Blob Storage client.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: UploadBuffer> Storage for AzureBlobStorage<C> {
    type Error = StorageError;

    async fn save_file(&self, container: &str, name: &str, data: &str) -> Result<(), StorageError> {
        info!(name = %name, container = %container, "uploading blob");

        self.client
            .upload_buffer(container, name, Bytes::copy_from_slice(data.as_bytes()))
            .await
            .map_err(|e| {
                error!(error = %e, container = %container, name = %name, "failed to save file");
                StorageError::from_client(PROVIDER, container, name, e)
            })
    }
}
