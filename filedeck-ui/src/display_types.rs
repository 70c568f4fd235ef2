//! Display types for UI components
//!
//! Lightweight copies of the store's records, holding only what the view
//! renders, so components work with real or hand-built data alike.

use filedeck_common::FileRecord;

/// One row in the file list
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    pub id: u64,
    pub name: String,
    /// MIME type, shown verbatim
    pub content_type: String,
    /// Short form of the type ("PDF", "TXT"), used as a tooltip
    pub type_label: String,
    pub last_modified_ms: u64,
    pub size_bytes: u64,
    /// Avatar letter
    pub initial: char,
}

impl FileRow {
    pub fn from_record(record: &FileRecord, type_label: impl Into<String>) -> Self {
        Self {
            id: record.id.get(),
            name: record.name.clone(),
            content_type: record.content_type.clone(),
            type_label: type_label.into(),
            last_modified_ms: record.last_modified_ms,
            size_bytes: record.size_bytes,
            initial: record.initial(),
        }
    }
}
