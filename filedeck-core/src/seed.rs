//! Fixed sample batch shown on first load.

use crate::content_type::ContentType;
use filedeck_common::{FileId, FileRecord};

/// Spacing between seed timestamps; record k is `k * SEED_AGE_STEP_MS` old.
pub const SEED_AGE_STEP_MS: u64 = 100_000;

const SEED_FILES: [(&str, ContentType, u64); 5] = [
    ("report.docx", ContentType::Docx, 500),
    ("presentation.pptx", ContentType::Pptx, 1500),
    ("data_analysis.pdf", ContentType::Pdf, 800),
    ("project_logo.png", ContentType::Png, 250),
    ("meeting_notes.txt", ContentType::PlainText, 50),
];

/// Build the seed batch: ids 1..=5, newest first.
pub fn seed_records(now_ms: u64) -> Vec<FileRecord> {
    SEED_FILES
        .iter()
        .enumerate()
        .map(|(i, (name, content_type, size_kib))| {
            let n = i as u64 + 1;
            FileRecord {
                id: FileId(n),
                name: name.to_string(),
                content_type: content_type.as_str().to_string(),
                last_modified_ms: now_ms.saturating_sub(n * SEED_AGE_STEP_MS),
                size_bytes: size_kib * 1024,
            }
        })
        .collect()
}
