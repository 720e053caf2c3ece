//! Upload relay container service.
//!
//! Serves `POST /demo` and the `GET /` health check behind a load balancer.

use relay_api::{AppState, create_container_router, serve};
use relay_core::storage::{AzureBlobClient, AzureBlobStorage, S3Client, S3Storage};
use relay_shared::{AppConfig, RuntimeProfile, StorageProvider, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    telemetry::init("relay=debug,relay_api=debug,relay_core=debug,tower_http=debug");

    let config = AppConfig::load(RuntimeProfile::Container)?;
    info!(
        provider = config.storage.provider.name(),
        container = %config.storage.container,
        "Storage configured"
    );

    let addr = config.server.addr();
    let container = config.storage.container;
    let app = match config.storage.provider {
        StorageProvider::S3(settings) => {
            create_container_router(AppState::new(S3Storage::new(S3Client::new(settings)), container))
        }
        StorageProvider::AzureBlob(settings) => create_container_router(AppState::new(
            AzureBlobStorage::new(AzureBlobClient::new(settings)),
            container,
        )),
    };

    serve(app, &addr).await?;

    Ok(())
}
