//! Recording storage double for handler tests.

use std::fmt;
use std::sync::Mutex;

use relay_core::storage::Storage;

#[derive(Debug, Clone)]
pub struct Write {
    pub container: String,
    pub name: String,
    pub data: String,
}

#[derive(Debug)]
pub struct MockError(pub String);

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mock backend failure: {}", self.0)
    }
}

impl std::error::Error for MockError {}

pub struct MockStorage {
    writes: Mutex<Vec<Write>>,
    fail_with: Option<String>,
}

impl MockStorage {
    pub fn succeeding() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    pub fn writes(&self) -> Vec<Write> {
        self.writes.lock().unwrap().clone()
    }
}

impl Storage for MockStorage {
    type Error = MockError;

    async fn save_file(&self, container: &str, name: &str, data: &str) -> Result<(), MockError> {
        self.writes.lock().unwrap().push(Write {
            container: container.to_string(),
            name: name.to_string(),
            data: data.to_string(),
        });
        match &self.fail_with {
            Some(reason) => Err(MockError(reason.clone())),
            None => Ok(()),
        }
    }
}
