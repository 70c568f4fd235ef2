//! FileListStore - the file list and selection, plus the operations on them
//!
//! Handles:
//! - Seeding the sample batch and adding synthetic files
//! - Selection toggling and select-all
//! - Deletes that wait on a [`FileRemote`] before mutating
//!
//! Deletes are split into three steps so a UI can keep rendering while the
//! remote call is in flight: [`FileListStore::begin_delete_file`] /
//! [`FileListStore::begin_delete_selected`] snapshot the ids,
//! [`PendingDeletion::run`] awaits the remote without touching the store, and
//! [`FileListStore::finish_delete`] applies everything in one transition or
//! nothing at all. [`FileListStore::delete_file`] and
//! [`FileListStore::delete_selected`] run all three in one call.

use crate::config::{Config, IdStrategy};
use crate::content_type::ContentType;
use crate::ids::{wall_clock_ms, ClockIds, IdGenerator, SequentialIds, WallClock};
use crate::remote::{FileRemote, RemoteError, SimulatedRemote};
use crate::seed::seed_records;
use filedeck_common::{FileId, FileList, FileRecord};
use futures::future::try_join_all;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Default exclusive upper bound for the size of added files, in KiB
pub const DEFAULT_MAX_RANDOM_SIZE_KIB: u64 = 100;

/// Largest size bound whose byte count still fits in a `u64`
pub const MAX_RANDOM_SIZE_KIB_LIMIT: u64 = u64::MAX / 1024;

/// Result of a delete operation. Deletes never return `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Remote calls succeeded. Holds the ids that were actually in the list.
    Deleted(Vec<FileId>),
    /// A remote call failed. The list and selection are unchanged.
    Failed(RemoteError),
}

impl DeleteOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, DeleteOutcome::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteScope {
    /// One record, selection of other records untouched
    Single,
    /// Snapshot of the selection; selection is cleared on success
    Selection,
}

/// Snapshot of a delete request, ready to be sent to the remote.
///
/// Owns everything it needs, so running it does not borrow the store.
pub struct PendingDeletion {
    ids: Vec<FileId>,
    scope: DeleteScope,
    remote: Arc<dyn FileRemote>,
}

impl PendingDeletion {
    pub fn ids(&self) -> &[FileId] {
        &self.ids
    }

    /// Send one remote call per id concurrently and wait for all of them.
    /// Total wait is one round trip regardless of the number of ids.
    pub async fn run(self) -> DeletionResult {
        let calls = self.ids.iter().map(|id| self.remote.delete(*id));
        let result = try_join_all(calls).await.map(|_| ());
        DeletionResult {
            ids: self.ids,
            scope: self.scope,
            result,
        }
    }
}

/// Remote outcome of a [`PendingDeletion`], to be applied with
/// [`FileListStore::finish_delete`].
#[derive(Debug)]
pub struct DeletionResult {
    ids: Vec<FileId>,
    scope: DeleteScope,
    result: Result<(), RemoteError>,
}

impl DeletionResult {
    pub fn ids(&self) -> &[FileId] {
        &self.ids
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// In-memory file list with selection.
///
/// Single owner; every mutation takes `&mut self`.
pub struct FileListStore {
    list: FileList,
    ids: Box<dyn IdGenerator>,
    wall_clock: WallClock,
    rng: StdRng,
    remote: Arc<dyn FileRemote>,
    max_random_size_kib: u64,
    initialized: bool,
}

impl std::fmt::Debug for FileListStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileListStore")
            .field("list", &self.list)
            .field("max_random_size_kib", &self.max_random_size_kib)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

impl FileListStore {
    /// Store with clock-derived ids, the real wall clock, and an entropy-seeded RNG.
    pub fn new(remote: Arc<dyn FileRemote>) -> Self {
        Self {
            list: FileList::new(),
            ids: Box::new(ClockIds::new()),
            wall_clock: Box::new(wall_clock_ms),
            rng: StdRng::from_os_rng(),
            remote,
            max_random_size_kib: DEFAULT_MAX_RANDOM_SIZE_KIB,
            initialized: false,
        }
    }

    /// Store wired from configuration, with a [`SimulatedRemote`].
    pub fn from_config(config: &Config) -> Self {
        let remote = SimulatedRemote::new(config.delete_latency());
        let store = Self::new(Arc::new(remote)).with_max_random_size_kib(config.max_random_size_kib);
        match config.id_strategy {
            IdStrategy::Clock => store,
            IdStrategy::Sequential => store.with_ids(SequentialIds::new()),
        }
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_wall_clock(mut self, wall_clock: impl Fn() -> u64 + Send + Sync + 'static) -> Self {
        self.wall_clock = Box::new(wall_clock);
        self
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Bounds above [`MAX_RANDOM_SIZE_KIB_LIMIT`] are clamped.
    pub fn with_max_random_size_kib(mut self, max_kib: u64) -> Self {
        if max_kib > MAX_RANDOM_SIZE_KIB_LIMIT {
            warn!(
                "max_random_size_kib {} too large, clamping to {}",
                max_kib, MAX_RANDOM_SIZE_KIB_LIMIT
            );
        }
        self.max_random_size_kib = max_kib.min(MAX_RANDOM_SIZE_KIB_LIMIT);
        self
    }

    /// Populate the sample batch. Runs once; later calls are ignored.
    pub fn initialize(&mut self) {
        if self.initialized {
            warn!("File list already initialized, ignoring");
            return;
        }
        self.initialized = true;

        let now = (self.wall_clock)();
        for mut record in seed_records(now) {
            if self.list.contains(record.id) {
                record.id = self.fresh_id();
            }
            self.list.push(record);
        }
        info!("Seeded {} files", self.list.len());
    }

    /// Append a synthetic text file. Returns its id.
    pub fn add_file(&mut self) -> FileId {
        let id = self.fresh_id();
        let size_kib = if self.max_random_size_kib == 0 {
            0
        } else {
            self.rng.random_range(0..self.max_random_size_kib)
        };
        let record = FileRecord {
            id,
            name: format!("New File {}.txt", self.list.len() + 1),
            content_type: ContentType::PlainText.as_str().to_string(),
            last_modified_ms: (self.wall_clock)(),
            size_bytes: size_kib * 1024,
        };
        debug!("Adding file {} ({})", record.id, record.name);
        self.list.push(record);
        id
    }

    /// Flip selection of `id`. Unknown ids are ignored.
    pub fn toggle_selection(&mut self, id: FileId) {
        let selected = self.list.toggle_selection(id);
        debug!("Toggled file {} selected={}", id, selected);
    }

    pub fn select_all(&mut self) {
        self.list.select_all();
        debug!("Selected all {} files", self.list.selected_count());
    }

    pub fn begin_delete_file(&self, id: FileId) -> PendingDeletion {
        PendingDeletion {
            ids: vec![id],
            scope: DeleteScope::Single,
            remote: self.remote.clone(),
        }
    }

    pub fn begin_delete_selected(&self) -> PendingDeletion {
        PendingDeletion {
            ids: self.list.selected_ids().to_vec(),
            scope: DeleteScope::Selection,
            remote: self.remote.clone(),
        }
    }

    /// Apply a finished deletion. On remote failure the error is logged and
    /// nothing changes.
    pub fn finish_delete(&mut self, deletion: DeletionResult) -> DeleteOutcome {
        let DeletionResult { ids, scope, result } = deletion;

        if let Err(e) = result {
            match scope {
                DeleteScope::Single => error!("Error deleting file: {}", e),
                DeleteScope::Selection => error!("Error deleting selected files: {}", e),
            }
            return DeleteOutcome::Failed(e);
        }

        let removed: Vec<FileId> = match scope {
            DeleteScope::Single => ids
                .iter()
                .filter_map(|id| self.list.remove(*id))
                .map(|r| r.id)
                .collect(),
            DeleteScope::Selection => {
                let removed = self.list.remove_many(&ids);
                self.list.clear_selection();
                removed.into_iter().map(|r| r.id).collect()
            }
        };

        if removed.is_empty() {
            debug!("Delete of {:?} matched no files", ids);
        } else {
            info!("Deleted {} file(s)", removed.len());
        }
        DeleteOutcome::Deleted(removed)
    }

    /// Wait on the remote, then remove `id` from the list and the selection.
    pub async fn delete_file(&mut self, id: FileId) -> DeleteOutcome {
        let result = self.begin_delete_file(id).run().await;
        self.finish_delete(result)
    }

    /// Wait on one remote call per selected id (concurrently), then remove all
    /// of them and clear the selection in one step.
    pub async fn delete_selected(&mut self) -> DeleteOutcome {
        let result = self.begin_delete_selected().run().await;
        self.finish_delete(result)
    }

    pub fn records(&self) -> &[FileRecord] {
        self.list.records()
    }

    pub fn selected_ids(&self) -> &[FileId] {
        self.list.selected_ids()
    }

    pub fn is_selected(&self, id: FileId) -> bool {
        self.list.is_selected(id)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.list.selected_count()
    }

    pub fn has_selection(&self) -> bool {
        self.list.has_selection()
    }

    fn fresh_id(&mut self) -> FileId {
        loop {
            let id = self.ids.next_id();
            if !self.list.contains(id) {
                return id;
            }
            debug!("Id {} already taken, drawing another", id);
        }
    }
}
