//! Upload relay as an Azure Functions custom handler.
//!
//! The Functions host starts this process and proxies HTTP triggers to the
//! port it advertises in `FUNCTIONS_CUSTOMHANDLER_PORT`.

use relay_api::{AppState, create_function_router, serve};
use relay_core::storage::{AzureBlobClient, AzureBlobStorage, S3Client, S3Storage};
use relay_shared::{AppConfig, RuntimeProfile, StorageProvider, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init("relay_function=info,relay_api=info,relay_core=info");

    let config = AppConfig::load(RuntimeProfile::Function)?;
    info!(
        provider = config.storage.provider.name(),
        container = %config.storage.container,
        port = config.server.port,
        "Storage configured"
    );

    let addr = config.server.addr();
    let container = config.storage.container;
    let app = match config.storage.provider {
        StorageProvider::AzureBlob(settings) => create_function_router(AppState::new(
            AzureBlobStorage::new(AzureBlobClient::new(settings)),
            container,
        )),
        StorageProvider::S3(settings) => {
            create_function_router(AppState::new(S3Storage::new(S3Client::new(settings)), container))
        }
    };

    serve(app, &addr).await?;

    Ok(())
}
