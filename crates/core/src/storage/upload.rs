//! Upload orchestration: name the object, delegate the write.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::backend::Storage;
use super::clock::{Clock, SystemClock};

/// Suffix appended to every object name.
pub const OBJECT_NAME_SUFFIX: &str = "-request.json";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Object name for an upload made at `at`.
///
/// Format: `YYYY-MM-DDTHH:MM:SS-request.json`. Second precision only, so two
/// uploads in the same second share a name and the later one overwrites.
#[must_use]
pub fn object_name(at: DateTime<Utc>) -> String {
    format!("{}{OBJECT_NAME_SUFFIX}", at.format(TIMESTAMP_FORMAT))
}

/// Store `data` in `container` under a timestamped name.
///
/// The backend's result is returned unchanged. There is no retry and no
/// fallback to another backend.
pub async fn upload<S: Storage>(storage: &S, container: &str, data: &str) -> Result<(), S::Error> {
    upload_with_clock(storage, &SystemClock, container, data).await
}

/// Same as [`upload`], reading the time from `clock`.
pub async fn upload_with_clock<S: Storage, C: Clock>(
    storage: &S,
    clock: &C,
    container: &str,
    data: &str,
) -> Result<(), S::Error> {
    let name = object_name(clock.now());
    info!(name = %name, container = %container, "uploading file");
    debug!(data = %data, "upload payload");

    storage.save_file(container, &name, data).await
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::storage::FixedClock;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStorage {
        writes: Mutex<Vec<(String, String, String)>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("unreachable")]
    struct Never;

    impl Storage for RecordingStorage {
        type Error = Never;

        async fn save_file(&self, container: &str, name: &str, data: &str) -> Result<(), Never> {
            self.writes.lock().unwrap().push((
                container.to_string(),
                name.to_string(),
                data.to_string(),
            ));
            Ok(())
        }
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(future)
    }

    // For any container and payload, exactly one write is issued and both
    // values reach the backend untouched.
    proptest! {
        #[test]
        fn prop_container_and_data_pass_through(
            container in "[a-z0-9][a-z0-9-]{2,62}",
            data in ".*",
        ) {
            let storage = RecordingStorage::default();
            let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 5, 10, 15, 30).unwrap());

            let result = block_on(upload_with_clock(&storage, &clock, &container, &data));
            prop_assert!(result.is_ok());

            let writes = storage.writes.lock().unwrap();
            prop_assert_eq!(writes.len(), 1);
            prop_assert_eq!(&writes[0].0, &container);
            prop_assert_eq!(&writes[0].1, "2024-03-05T10:15:30-request.json");
            prop_assert_eq!(&writes[0].2, &data);
        }
    }

    // Names are always 19 timestamp characters followed by the suffix.
    proptest! {
        #[test]
        fn prop_object_name_shape(secs in 0i64..4_102_444_800) {
            let at = Utc.timestamp_opt(secs, 0).unwrap();
            let name = object_name(at);

            prop_assert!(name.ends_with(OBJECT_NAME_SUFFIX));
            prop_assert_eq!(name.len(), 19 + OBJECT_NAME_SUFFIX.len());
            prop_assert_eq!(&name[10..11], "T");
        }
    }
}
