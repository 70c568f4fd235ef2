//! File list state store

use crate::display_types::FileRow;
use dioxus::prelude::*;

/// State for the file list view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct FileListState {
    /// Rows in list order
    pub files: Vec<FileRow>,
    /// Selected ids, in selection order
    pub selected: Vec<u64>,
    /// Ids with a single-file delete in flight
    pub deleting: Vec<u64>,
    /// Ids snapshotted by the delete-selected in flight; empty when idle
    pub bulk_deleting: Vec<u64>,
    /// Message from the last failed delete
    pub error: Option<String>,
}

impl FileListState {
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_bulk_deleting(&self) -> bool {
        !self.bulk_deleting.is_empty()
    }

    pub fn is_deleting(&self, id: u64) -> bool {
        self.bulk_deleting.contains(&id) || self.deleting.contains(&id)
    }

    /// "Delete Selected" is available when something is selected and no bulk
    /// delete is already running.
    pub fn can_delete_selected(&self) -> bool {
        !self.selected.is_empty() && !self.is_bulk_deleting()
    }
}
