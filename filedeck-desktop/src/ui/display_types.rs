//! Conversion from store records to UI display types

use filedeck_core::content_type::ContentType;
use filedeck_core::FileRecord;
use filedeck_ui::FileRow;

pub fn row_from_record(record: &FileRecord) -> FileRow {
    let label = ContentType::from_mime(&record.content_type).label();
    FileRow::from_record(record, label)
}
