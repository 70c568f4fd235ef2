//! AppService - owns the file list store and its reactive projection
//!
//! AppService holds the `FileListStore` (in a `Signal`) and the
//! `Store<FileListState>` the view reads. It is responsible for:
//! - Applying user actions to the file list store
//! - Running deletes without holding the store across the remote wait
//! - Re-projecting the store into `FileListState` after every change
//!
//! UI components access AppService via `use_app()`.

use crate::ui::display_types::row_from_record;
use dioxus::prelude::*;
use filedeck_core::config::Config;
use filedeck_core::{DeleteOutcome, FileId, FileListStore};
use filedeck_ui::stores::{FileListState, FileListStateStoreExt};
use tracing::{debug, info};

/// Created inside the component tree because `Signal` and `Store` are not Send.
#[derive(Clone, Copy)]
pub struct AppService {
    /// Reactive view state (Store for fine-grained reactivity)
    pub state: Store<FileListState>,
    /// The file list itself; only this service mutates it
    store: Signal<FileListStore>,
}

impl AppService {
    pub fn new(config: &Config) -> Self {
        let mut file_store = FileListStore::from_config(config);
        if config.seed_on_start {
            file_store.initialize();
        }
        let service = Self {
            state: Store::new(FileListState::default()),
            store: Signal::new(file_store),
        };
        service.refresh();
        service
    }

    /// Copy records and selection from the store into the view state.
    fn refresh(&self) {
        let (files, selected) = {
            let store = self.store.read();
            let files = store.records().iter().map(row_from_record).collect();
            let selected = store.selected_ids().iter().map(|id| id.get()).collect();
            (files, selected)
        };
        self.state.files().set(files);
        self.state.selected().set(selected);
    }

    fn record_outcome(&self, outcome: DeleteOutcome) {
        match outcome {
            DeleteOutcome::Deleted(ids) => {
                debug!("Delete applied to {} file(s)", ids.len());
                self.state.error().set(None);
            }
            DeleteOutcome::Failed(e) => self.state.error().set(Some(e.to_string())),
        }
    }

    pub fn toggle_selection(&self, id: u64) {
        let mut store = self.store;
        store.write().toggle_selection(FileId(id));
        self.refresh();
    }

    /// Bound to the "Select All" button
    pub fn select_all(&self) {
        let mut store = self.store;
        store.write().select_all();
        self.refresh();
    }

    pub fn add_file(&self) {
        let mut store = self.store;
        let id = store.write().add_file();
        info!("Added file {}", id);
        self.refresh();
    }

    pub fn delete_file(&self, id: u64) {
        if self.state.read().is_deleting(id) {
            return;
        }
        self.state.deleting().with_mut(|list| list.push(id));

        let pending = self.store.read().begin_delete_file(FileId(id));
        let service = *self;
        spawn(async move {
            let result = pending.run().await;
            let mut store = service.store;
            let outcome = store.write().finish_delete(result);
            service
                .state
                .deleting()
                .with_mut(|list| list.retain(|d| *d != id));
            service.record_outcome(outcome);
            service.refresh();
        });
    }

    pub fn delete_selected(&self) {
        if !self.state.read().can_delete_selected() {
            return;
        }
        let pending = self.store.read().begin_delete_selected();
        info!("Deleting {} selected file(s)", pending.ids().len());
        self.state
            .bulk_deleting()
            .set(pending.ids().iter().map(|id| id.get()).collect());
        let service = *self;
        spawn(async move {
            let result = pending.run().await;
            let mut store = service.store;
            let outcome = store.write().finish_delete(result);
            service.state.bulk_deleting().set(Vec::new());
            service.record_outcome(outcome);
            service.refresh();
        });
    }

    pub fn dismiss_error(&self) {
        self.state.error().set(None);
    }
}

/// Hook to access AppService from any component
pub fn use_app() -> AppService {
    use_context::<AppService>()
}
