use filedeck_core::ids::SequentialIds;
use filedeck_core::remote::{RejectPolicy, SimulatedRemote};
use filedeck_core::FileListStore;
use std::sync::Arc;
use std::time::Duration;

/// Fixed "now" for deterministic timestamps
pub const NOW_MS: u64 = 1_700_000_000_000;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Store with sequential ids, a fixed clock, a seeded RNG, and a 500ms remote.
pub fn test_store(reject: RejectPolicy) -> FileListStore {
    tracing_init();
    let remote = SimulatedRemote::new(Duration::from_millis(500)).rejecting(reject);
    FileListStore::new(Arc::new(remote))
        .with_ids(SequentialIds::new())
        .with_wall_clock(|| NOW_MS)
        .with_rng_seed(7)
}

/// Seeded store, ids 1..=5
pub fn seeded_store() -> FileListStore {
    let mut store = test_store(RejectPolicy::Never);
    store.initialize();
    store
}

pub fn ids_of(store: &FileListStore) -> Vec<u64> {
    store.records().iter().map(|r| r.id.get()).collect()
}

pub fn selected_of(store: &FileListStore) -> Vec<u64> {
    store.selected_ids().iter().map(|id| id.get()).collect()
}

/// Every selected id must name a record in the list
pub fn assert_selection_consistent(store: &FileListStore) {
    for id in store.selected_ids() {
        assert!(
            store.records().iter().any(|r| r.id == *id),
            "selected id {id} has no record"
        );
    }
}
