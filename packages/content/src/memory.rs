use std::sync::{Arc, Mutex};

use crate::loader::LoadError;
use crate::source::ContentSource;

/// In-memory ContentSource for testing and previews.
///
/// `None` simulates an unreachable source.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    text: Arc<Mutex<Option<String>>>,
    reads: Arc<Mutex<usize>>,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::new(Mutex::new(Some(text.into()))),
            reads: Arc::default(),
        }
    }

    /// A source that fails every read.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn set(&self, text: impl Into<String>) {
        *self.text.lock().unwrap() = Some(text.into());
    }

    /// Number of reads served so far.
    pub fn reads(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl ContentSource for MemorySource {
    async fn read(&self) -> Result<String, LoadError> {
        *self.reads.lock().unwrap() += 1;
        self.text
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| LoadError::Unavailable("memory source is empty".to_string()))
    }
}
