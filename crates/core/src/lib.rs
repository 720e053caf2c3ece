//! Core upload logic for the relay.
//!
//! This crate contains the storage capability and everything that drives it,
//! with ZERO web dependencies. Entrypoints construct an adapter once and hand
//! it to [`storage::upload`] for every request.
//!
//! # Modules
//!
//! - `storage` - `Storage` trait, S3 and Azure Blob adapters, upload orchestration

pub mod storage;
