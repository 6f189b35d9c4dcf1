//! Document data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How much extracted text is kept as the user-facing preview.
/// The full text is always retained separately as query context.
pub const PREVIEW_CHARS: usize = 400;

/// A file handed to the session for upload. No type or size policy is
/// enforced here; that belongs to the service and the file picker.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    /// MIME type as the file picker reported it; may be empty.
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// The single currently-loaded document: file metadata plus the text the
/// service extracted from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier
    pub id: String,
    /// Original file name
    pub name: String,
    /// Size of the uploaded file in bytes
    pub size_bytes: u64,
    /// Reported MIME type, or "Unknown" when the picker gave none
    pub mime_type: String,
    /// Full extracted text, used verbatim as query context
    pub extracted_text: String,
    /// Short text prefix for display
    pub preview: String,
    /// When the upload completed
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(name: String, mime_type: String, size_bytes: u64, extracted_text: String) -> Self {
        let mime_type = if mime_type.is_empty() {
            "Unknown".to_string()
        } else {
            mime_type
        };

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            size_bytes,
            mime_type,
            preview: preview_of(&extracted_text),
            extracted_text,
            uploaded_at: Utc::now(),
        }
    }
}

fn preview_of(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
