//! Upload entity representing a file to publish.

use crate::utils::filename::{FilenameError, sanitize_filename};

/// A file to publish, with its filename already sanitized.
///
/// The only way to build an `Upload` is [`Upload::new`], so `filename` is
/// always safe to embed in a repository path and a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    filename: String,
    content: Vec<u8>,
}

impl Upload {
    /// Creates an upload, sanitizing the client-supplied filename.
    ///
    /// # Errors
    ///
    /// Returns [`FilenameError`] if nothing usable remains after sanitizing.
    pub fn new(filename: &str, content: Vec<u8>) -> Result<Self, FilenameError> {
        Ok(Self {
            filename: sanitize_filename(filename)?,
            content,
        })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }
}
