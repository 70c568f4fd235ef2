use crate::{FileId, FileRecord};

/// Ordered file records plus the set of selected ids.
///
/// Every selected id refers to a record in the list. Removing a record drops
/// its selection entry in the same call, so no method can leave a dangling id.
/// Selection keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    records: Vec<FileRecord>,
    selected: Vec<FileId>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Callers guarantee the id is not already present.
    pub fn push(&mut self, record: FileRecord) {
        debug_assert!(!self.contains(record.id), "duplicate id {}", record.id);
        self.records.push(record);
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn ids(&self) -> Vec<FileId> {
        self.records.iter().map(|r| r.id).collect()
    }

    pub fn selected_ids(&self) -> &[FileId] {
        &self.selected
    }

    pub fn is_selected(&self, id: FileId) -> bool {
        self.selected.contains(&id)
    }

    /// Flip selection for `id`. Unknown ids are ignored.
    /// Returns the new membership.
    pub fn toggle_selection(&mut self, id: FileId) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            return false;
        }
        if !self.contains(id) {
            return false;
        }
        self.selected.push(id);
        true
    }

    /// Replace the selection with every id, in list order.
    pub fn select_all(&mut self) {
        self.selected = self.ids();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Remove one record and its selection entry.
    pub fn remove(&mut self, id: FileId) -> Option<FileRecord> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        self.selected.retain(|s| *s != id);
        Some(self.records.remove(pos))
    }

    /// Remove every record whose id is in `ids`, along with their selection
    /// entries. Unknown ids are skipped. Returns the removed records in list order.
    pub fn remove_many(&mut self, ids: &[FileId]) -> Vec<FileRecord> {
        if ids.is_empty() {
            return Vec::new();
        }
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| ids.contains(&r.id));
        self.records = kept;
        self.selected.retain(|s| !ids.contains(s));
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> FileRecord {
        FileRecord {
            id: FileId(id),
            name: format!("file-{id}.txt"),
            content_type: "text/plain".to_string(),
            last_modified_ms: 1_000 * id,
            size_bytes: 1024 * id,
        }
    }

    fn list_of(ids: &[u64]) -> FileList {
        let mut list = FileList::new();
        for id in ids {
            list.push(record(*id));
        }
        list
    }

    fn assert_selection_consistent(list: &FileList) {
        for id in list.selected_ids() {
            assert!(list.contains(*id), "selected id {id} has no record");
        }
    }

    #[test]
    fn test_push_preserves_order() {
        let list = list_of(&[3, 1, 2]);
        assert_eq!(list.ids(), vec![FileId(3), FileId(1), FileId(2)]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut list = list_of(&[1, 2, 3]);
        assert!(list.toggle_selection(FileId(2)));
        assert!(list.is_selected(FileId(2)));
        assert!(!list.toggle_selection(FileId(2)));
        assert!(!list.is_selected(FileId(2)));
        assert!(!list.has_selection());
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let mut list = list_of(&[1, 2]);
        assert!(!list.toggle_selection(FileId(99)));
        assert!(list.selected_ids().is_empty());
        assert_selection_consistent(&list);
    }

    #[test]
    fn test_selection_keeps_insertion_order() {
        let mut list = list_of(&[1, 2, 3, 4]);
        list.toggle_selection(FileId(4));
        list.toggle_selection(FileId(1));
        assert_eq!(list.selected_ids(), &[FileId(4), FileId(1)]);
    }

    #[test]
    fn test_select_all_uses_list_order() {
        let mut list = list_of(&[5, 2, 9]);
        list.toggle_selection(FileId(9));
        list.select_all();
        assert_eq!(list.selected_ids(), &[FileId(5), FileId(2), FileId(9)]);
        assert_eq!(list.selected_count(), 3);
    }

    #[test]
    fn test_remove_drops_selection_entry() {
        let mut list = list_of(&[1, 2, 3]);
        list.toggle_selection(FileId(2));
        let removed = list.remove(FileId(2));
        assert_eq!(removed.map(|r| r.id), Some(FileId(2)));
        assert!(!list.contains(FileId(2)));
        assert!(!list.is_selected(FileId(2)));
        assert_selection_consistent(&list);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = list_of(&[1, 2]);
        list.toggle_selection(FileId(1));
        let before = list.clone();
        assert!(list.remove(FileId(7)).is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_many() {
        let mut list = list_of(&[1, 2, 3, 4, 5]);
        list.toggle_selection(FileId(2));
        list.toggle_selection(FileId(4));
        list.toggle_selection(FileId(5));
        let removed = list.remove_many(&[FileId(4), FileId(2), FileId(42)]);
        assert_eq!(
            removed.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![FileId(2), FileId(4)]
        );
        assert_eq!(list.ids(), vec![FileId(1), FileId(3), FileId(5)]);
        assert_eq!(list.selected_ids(), &[FileId(5)]);
        assert_selection_consistent(&list);
    }

    #[test]
    fn test_remove_many_empty_slice() {
        let mut list = list_of(&[1]);
        assert!(list.remove_many(&[]).is_empty());
        assert_eq!(list.len(), 1);
    }
}
