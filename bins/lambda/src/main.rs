//! Upload relay on AWS Lambda behind an API Gateway proxy integration.
//!
//! The adapter is built once per cold start and reused by every invocation.

use lambda_runtime::{Error, LambdaEvent, service_fn};
use relay_api::AppState;
use relay_api::lambda::{ApiGatewayProxyRequest, handle_proxy_event};
use relay_core::storage::{AzureBlobClient, AzureBlobStorage, S3Client, S3Storage, Storage};
use relay_shared::{AppConfig, RuntimeProfile, StorageProvider, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init("info");

    let config = AppConfig::load(RuntimeProfile::Lambda)?;
    info!(
        provider = config.storage.provider.name(),
        container = %config.storage.container,
        "Storage configured"
    );

    let container = config.storage.container;
    match config.storage.provider {
        StorageProvider::S3(settings) => {
            run(AppState::new(S3Storage::new(S3Client::new(settings)), container)).await
        }
        StorageProvider::AzureBlob(settings) => {
            run(AppState::new(
                AzureBlobStorage::new(AzureBlobClient::new(settings)),
                container,
            ))
            .await
        }
    }
}

async fn run<S: Storage + 'static>(state: AppState<S>) -> Result<(), Error> {
    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<Option<ApiGatewayProxyRequest>>| {
            let state = state.clone();
            async move { Ok::<_, Error>(handle_proxy_event(&state, event.payload).await) }
        },
    ))
    .await
}
