//! File attachment metadata
//!
//! Claims, payment proofs, and personal documents all go through the same
//! upload rules: PDF, JPEG, or PNG, at most 10 MiB per file. The core never
//! reads file bytes; it checks only the metadata supplied by the caller and
//! keeps an opaque identifier into the file store.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::identifiers::AttachmentId;

/// Size ceiling for a single uploaded file (10 MiB)
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted media types for uploaded documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Pdf,
    Jpeg,
    Png,
}

impl MediaType {
    /// Resolves a media type from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(MediaType::Pdf),
            "jpg" | "jpeg" => Some(MediaType::Jpeg),
            "png" => Some(MediaType::Png),
            _ => None,
        }
    }

    /// Resolves a media type from a MIME string
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(MediaType::Pdf),
            "image/jpeg" => Some(MediaType::Jpeg),
            "image/png" => Some(MediaType::Png),
            _ => None,
        }
    }

    /// Returns the canonical MIME string
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mime())
    }
}

/// Errors raised by attachment metadata validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("File {name} is {size_bytes} bytes, over the {limit_bytes} byte limit")]
    FileTooLarge {
        name: String,
        size_bytes: u64,
        limit_bytes: u64,
    },

    #[error("File name is empty")]
    EmptyFileName,
}

/// Reference to a stored file
///
/// The id is opaque to the core; resolving it to bytes is the file store's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub id: AttachmentId,
    pub file_name: String,
    pub media_type: MediaType,
    pub size_bytes: u64,
}

impl FileReference {
    /// Builds a validated file reference from caller-supplied metadata
    ///
    /// # Errors
    ///
    /// Returns `FileError` if the name is empty, the declared MIME type is
    /// outside the accepted set, or the declared size exceeds the ceiling.
    pub fn new(file_name: impl Into<String>, mime: &str, size_bytes: u64) -> Result<Self, FileError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(FileError::EmptyFileName);
        }

        let media_type =
            MediaType::from_mime(mime).ok_or_else(|| FileError::UnsupportedMediaType(mime.to_string()))?;

        if size_bytes > MAX_ATTACHMENT_BYTES {
            return Err(FileError::FileTooLarge {
                name: file_name,
                size_bytes,
                limit_bytes: MAX_ATTACHMENT_BYTES,
            });
        }

        Ok(Self {
            id: AttachmentId::new_v7(),
            file_name,
            media_type,
            size_bytes,
        })
    }

    /// Re-checks an already-constructed reference, used when references
    /// arrive pre-built from another subsystem.
    pub fn validate(&self) -> Result<(), FileError> {
        if self.file_name.trim().is_empty() {
            return Err(FileError::EmptyFileName);
        }
        if self.size_bytes > MAX_ATTACHMENT_BYTES {
            return Err(FileError::FileTooLarge {
                name: self.file_name.clone(),
                size_bytes: self.size_bytes,
                limit_bytes: MAX_ATTACHMENT_BYTES,
            });
        }
        Ok(())
    }
}
