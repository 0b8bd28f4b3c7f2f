/**
 * API Contract Types for the OSS upload gateway
 *
 * These types define the exact structure of the request/response exchanged
 * with the gateway's internal upload endpoint.
 *
 * IMPORTANT: These must stay in sync with the gateway's internal OSS router
 * (mounted at /internal/oss).
 *
 * Principles:
 * - Use explicit Option<T> instead of omitting fields
 * - Use serde attributes to match JSON format exactly
 * - Be lenient on input: unknown fields are ignored, missing flags default
 */

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// File Type Tag
// =============================================================================

/// Kind of media being forwarded. The gateway understands "image" and
/// "video"; any other tag is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileType {
    #[default]
    Image,
    Video,
    Other(String),
}

impl FileType {
    pub fn as_str(&self) -> &str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Other(tag) => tag,
        }
    }
}

impl From<String> for FileType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "image" => FileType::Image,
            "video" => FileType::Video,
            _ => FileType::Other(tag),
        }
    }
}

impl From<&str> for FileType {
    fn from(tag: &str) -> Self {
        FileType::from(tag.to_string())
    }
}

impl From<FileType> for String {
    fn from(file_type: FileType) -> Self {
        match file_type {
            FileType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Upload From URL Endpoint
// =============================================================================

/// Request body for POST /internal/oss/upload-from-url
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadFromUrlRequest {
    pub url: String,            // Source file location
    #[serde(rename = "type")]
    pub file_type: FileType,
}

impl UploadFromUrlRequest {
    pub fn new(url: impl Into<String>, file_type: FileType) -> Self {
        Self {
            url: url.into(),
            file_type,
        }
    }
}

/// Response from POST /internal/oss/upload-from-url
///
/// The gateway answers `{"success": true, "url": "..."}` on success and
/// `{"success": false, "error": "..."}` when its own upload failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadFromUrlResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub url: Option<String>,    // Storage URL, present on success
    #[serde(default)]
    pub error: Option<String>,  // Gateway-side failure message
}

impl UploadFromUrlResponse {
    /// Get the storage URL if the gateway confirmed the upload, None otherwise
    pub fn storage_url(&self) -> Option<&str> {
        if !self.success {
            return None;
        }
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

// =============================================================================
// Tests
// =============================================================================
