//! filedeck-core - In-memory file list store with simulated remote deletes

pub mod config;
pub mod content_type;
pub mod ids;
pub mod remote;
pub mod seed;
pub mod store;

pub use filedeck_common::{format_size_kb, FileId, FileList, FileRecord};
pub use store::{DeleteOutcome, DeletionResult, FileListStore, PendingDeletion};
