//! Where the content document comes from.
//!
//! The loader only needs the raw text of the document; each [`ContentSource`]
//! decides how to get it. [`EmbeddedSource`] is the one the site ships with:
//! the document is compiled into the binary, so loading it never touches the
//! network.

use crate::loader::LoadError;

/// The embedded site content document.
const SITE_CONTENT: &str = include_str!("../data/site.toml");

/// Read access to the raw content document.
pub trait ContentSource {
    fn read(&self) -> impl std::future::Future<Output = Result<String, LoadError>>;
}

/// Content compiled into the binary at build time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmbeddedSource {
    text: &'static str,
}

impl EmbeddedSource {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }
}

impl Default for EmbeddedSource {
    fn default() -> Self {
        Self::new(SITE_CONTENT)
    }
}

impl ContentSource for EmbeddedSource {
    async fn read(&self) -> Result<String, LoadError> {
        Ok(self.text.to_string())
    }
}
