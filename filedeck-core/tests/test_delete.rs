mod support;
use crate::support::{assert_selection_consistent, ids_of, seeded_store, selected_of, test_store};
use filedeck_core::remote::{RejectPolicy, RemoteError};
use filedeck_core::{DeleteOutcome, FileId};
use std::collections::HashSet;
use std::time::Duration;
use tokio::time::Instant;

fn seeded_rejecting(reject: RejectPolicy) -> filedeck_core::FileListStore {
    let mut store = test_store(reject);
    store.initialize();
    store
}

#[tokio::test(start_paused = true)]
async fn test_delete_file_removes_record_and_selection() {
    let mut store = seeded_store();
    store.toggle_selection(FileId(3));
    store.toggle_selection(FileId(1));

    let outcome = store.delete_file(FileId(3)).await;

    assert_eq!(outcome, DeleteOutcome::Deleted(vec![FileId(3)]));
    assert_eq!(ids_of(&store), vec![1, 2, 4, 5]);
    assert_eq!(selected_of(&store), vec![1]);
    assert_selection_consistent(&store);
}

#[tokio::test(start_paused = true)]
async fn test_delete_file_waits_for_latency() {
    let mut store = seeded_store();
    let start = Instant::now();
    store.delete_file(FileId(1)).await;
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_delete_missing_file_is_noop() {
    let mut store = seeded_store();
    store.toggle_selection(FileId(2));

    let outcome = store.delete_file(FileId(42)).await;

    assert_eq!(outcome, DeleteOutcome::Deleted(vec![]));
    assert_eq!(ids_of(&store), vec![1, 2, 3, 4, 5]);
    assert_eq!(selected_of(&store), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn test_delete_selected_scenario() {
    let mut store = seeded_store();
    store.toggle_selection(FileId(2));
    store.toggle_selection(FileId(4));
    assert_eq!(selected_of(&store), vec![2, 4]);

    let outcome = store.delete_selected().await;

    assert_eq!(outcome, DeleteOutcome::Deleted(vec![FileId(2), FileId(4)]));
    assert_eq!(ids_of(&store), vec![1, 3, 5]);
    assert!(!store.has_selection());
}

#[tokio::test(start_paused = true)]
async fn test_delete_selected_takes_one_round_trip() {
    let mut store = seeded_store();
    store.select_all();

    let start = Instant::now();
    store.delete_selected().await;
    let elapsed = start.elapsed();

    assert!(store.is_empty());
    assert!(elapsed >= Duration::from_millis(500));
    assert!(elapsed < Duration::from_millis(1000), "took {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn test_delete_selected_with_empty_selection() {
    let mut store = seeded_store();
    let start = Instant::now();

    let outcome = store.delete_selected().await;

    assert_eq!(outcome, DeleteOutcome::Deleted(vec![]));
    assert_eq!(store.len(), 5);
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_delete_selected_is_applied_in_one_step() {
    let mut store = seeded_store();
    for id in [1, 2, 3] {
        store.toggle_selection(FileId(id));
    }

    let pending = store.begin_delete_selected();
    assert_eq!(pending.ids(), &[FileId(1), FileId(2), FileId(3)]);
    assert_eq!(store.len(), 5);

    let result = pending.run().await;
    assert!(result.is_ok());
    // Remote finished, store still untouched until the result is applied
    assert_eq!(ids_of(&store), vec![1, 2, 3, 4, 5]);
    assert_eq!(selected_of(&store), vec![1, 2, 3]);

    store.finish_delete(result);
    assert_eq!(ids_of(&store), vec![4, 5]);
    assert!(!store.has_selection());
}

#[tokio::test(start_paused = true)]
async fn test_selection_changed_while_pending_is_cleared() {
    let mut store = seeded_store();
    store.toggle_selection(FileId(1));

    let pending = store.begin_delete_selected();
    store.toggle_selection(FileId(5));
    let result = pending.run().await;
    store.finish_delete(result);

    // Only the snapshot is deleted, but the whole selection is cleared
    assert_eq!(ids_of(&store), vec![2, 3, 4, 5]);
    assert!(!store.has_selection());
}

#[tokio::test(start_paused = true)]
async fn test_single_delete_finishing_inside_bulk_delete() {
    let mut store = seeded_store();
    store.toggle_selection(FileId(2));
    store.toggle_selection(FileId(3));

    let bulk = store.begin_delete_selected();
    let single = store.begin_delete_file(FileId(3));
    let (bulk, single) = tokio::join!(bulk.run(), single.run());

    assert_eq!(store.finish_delete(single), DeleteOutcome::Deleted(vec![FileId(3)]));
    assert_eq!(selected_of(&store), vec![2]);
    assert_selection_consistent(&store);

    assert_eq!(store.finish_delete(bulk), DeleteOutcome::Deleted(vec![FileId(2)]));
    assert_eq!(ids_of(&store), vec![1, 4, 5]);
    assert!(!store.has_selection());
    assert_selection_consistent(&store);
}

#[tokio::test(start_paused = true)]
async fn test_bulk_delete_finishing_before_overlapping_single() {
    let mut store = seeded_store();
    store.toggle_selection(FileId(2));
    store.toggle_selection(FileId(3));

    let bulk = store.begin_delete_selected();
    let single = store.begin_delete_file(FileId(3));
    let (bulk, single) = tokio::join!(bulk.run(), single.run());

    assert_eq!(
        store.finish_delete(bulk),
        DeleteOutcome::Deleted(vec![FileId(2), FileId(3)])
    );
    assert_eq!(store.finish_delete(single), DeleteOutcome::Deleted(vec![]));
    assert_eq!(ids_of(&store), vec![1, 4, 5]);
    assert!(!store.has_selection());
    assert_selection_consistent(&store);
}

#[tokio::test(start_paused = true)]
async fn test_delete_file_failure_leaves_state() {
    let mut store = seeded_rejecting(RejectPolicy::Ids(HashSet::from([FileId(2)])));
    store.toggle_selection(FileId(2));

    let outcome = store.delete_file(FileId(2)).await;

    assert_eq!(outcome, DeleteOutcome::Failed(RemoteError::Rejected(FileId(2))));
    assert_eq!(ids_of(&store), vec![1, 2, 3, 4, 5]);
    assert_eq!(selected_of(&store), vec![2]);
}

#[tokio::test(start_paused = true)]
async fn test_delete_selected_partial_failure_leaves_state() {
    let mut store = seeded_rejecting(RejectPolicy::Ids(HashSet::from([FileId(4)])));
    for id in [2, 4, 5] {
        store.toggle_selection(FileId(id));
    }

    let outcome = store.delete_selected().await;

    assert!(outcome.is_failed());
    assert_eq!(ids_of(&store), vec![1, 2, 3, 4, 5]);
    assert_eq!(selected_of(&store), vec![2, 4, 5]);
}

#[tokio::test(start_paused = true)]
async fn test_outage_fails_both_deletes() {
    let mut store = seeded_rejecting(RejectPolicy::Always);
    store.select_all();

    assert!(store.delete_file(FileId(1)).await.is_failed());
    assert!(store.delete_selected().await.is_failed());
    assert_eq!(store.len(), 5);
    assert_eq!(store.selected_count(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_mixed_sequence_keeps_invariants() {
    let mut store = seeded_store();
    let added = store.add_file();
    store.toggle_selection(added);
    store.toggle_selection(FileId(1));
    assert_selection_consistent(&store);

    store.delete_file(added).await;
    assert_selection_consistent(&store);
    assert_eq!(selected_of(&store), vec![1]);

    store.add_file();
    store.select_all();
    store.delete_file(FileId(3)).await;
    assert_selection_consistent(&store);

    store.delete_selected().await;
    assert!(store.is_empty());
    assert!(!store.has_selection());
}
