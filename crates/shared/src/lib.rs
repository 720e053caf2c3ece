//! Shared configuration, errors, and telemetry for the upload relay.
//!
//! This crate provides the ambient pieces every entrypoint needs:
//! - Layered configuration (files, `RELAY__*` and platform variables)
//! - Application-wide error type with HTTP status mapping
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::{
    AppConfig, AzureBlobSettings, RuntimeProfile, S3Settings, ServerConfig, StorageConfig,
    StorageProvider,
};
pub use error::{AppError, AppResult};
