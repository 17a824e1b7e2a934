//! # Filesystem-backed content source
//!
//! [`FileSource`] reads the content document from disk. The `server` feature
//! uses it at startup to check the file named by `PORTFOLIO_CONTENT`, so an
//! edited document can be validated before it is embedded. Browser builds use
//! [`crate::EmbeddedSource`].
//!
//! The read is a blocking `std::fs` call; it happens once, before the server
//! starts accepting requests.

use std::path::PathBuf;

use crate::loader::LoadError;
use crate::source::ContentSource;

/// ContentSource reading a TOML document from a path.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ContentSource for FileSource {
    async fn read(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| LoadError::Unavailable(format!("{}: {e}", self.path.display())))
    }
}
