//! Blob storage capability and its cloud backends.
//!
//! One write operation, two interchangeable backends, both driven through
//! Apache OpenDAL:
//! - AWS S3 (and S3-compatible endpoints) via [`S3Storage`]
//! - Azure Blob Storage via [`AzureBlobStorage`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   upload(storage, container, data)
//! │  entrypoint  │ ───────────────────────────────────┐
//! └──────────────┘                                    ▼
//!                               ┌──────────────────────────────────┐
//!                               │ name = "%Y-%m-%dT%H:%M:%S"       │
//!                               │        + "-request.json"         │
//!                               │ storage.save_file(container,     │
//!                               │                   name, data)    │
//!                               └──────────────────────────────────┘
//!                                   │                       │
//!                           ┌───────▼──────┐        ┌───────▼────────────┐
//!                           │  S3Storage   │        │  AzureBlobStorage  │
//!                           │  put_object  │        │  upload_buffer     │
//!                           └──────────────┘        └────────────────────┘
//! ```

mod azblob;
mod backend;
mod clock;
mod error;
mod s3;
mod upload;

pub use azblob::{AzureBlobClient, AzureBlobStorage, UploadBuffer};
pub use backend::Storage;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::StorageError;
pub use s3::{PutObject, S3Client, S3Storage};
pub use upload::{OBJECT_NAME_SUFFIX, object_name, upload, upload_with_clock};
