//! File list view component - pure rendering, no store access
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<FileListState>` and reads fields through lenses.

use crate::components::error_banner::ErrorBanner;
use crate::components::file_card::FileCard;
use crate::components::icons::{CheckIcon, PlusIcon, TrashIcon};
use crate::components::{Button, ButtonVariant};
use crate::stores::file_list::{FileListState, FileListStateStoreExt};
use dioxus::prelude::*;

/// Header, action buttons, and one card per file
#[component]
pub fn FileListView(
    state: ReadStore<FileListState>,
    on_toggle: EventHandler<u64>,
    on_delete: EventHandler<u64>,
    on_select_all: EventHandler<()>,
    on_delete_selected: EventHandler<()>,
    on_add_file: EventHandler<()>,
    on_dismiss_error: EventHandler<()>,
) -> Element {
    let files = state.files().read().clone();
    let selected = state.selected().read().clone();
    let deleting = state.deleting().read().clone();
    let bulk_deleting = state.bulk_deleting().read().clone();
    let error = state.error().read().clone();

    let selected_count = selected.len();
    let can_delete_selected = selected_count > 0 && bulk_deleting.is_empty();
    let rows: Vec<_> = files
        .iter()
        .map(|file| {
            let is_selected = selected.contains(&file.id);
            let is_deleting = deleting.contains(&file.id) || bulk_deleting.contains(&file.id);
            (file.id, file.clone(), is_selected, is_deleting)
        })
        .collect();

    rsx! {
        div { class: "relative z-10 w-full max-w-4xl mx-auto p-4 sm:p-8 flex flex-col",
            h1 { class: "text-white text-center text-2xl sm:text-3xl font-bold mb-6 sm:mb-8",
                "Uploaded Files"
            }
            div { class: "mb-6 flex flex-wrap justify-between gap-2",
                div { class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: files.is_empty(),
                        onclick: move |_| on_select_all.call(()),
                        CheckIcon { class: "w-5 h-5" }
                        "Select All"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_add_file.call(()),
                        PlusIcon { class: "w-5 h-5" }
                        "Add File"
                    }
                }
                Button {
                    variant: ButtonVariant::Danger,
                    disabled: !can_delete_selected,
                    onclick: move |_| on_delete_selected.call(()),
                    TrashIcon { class: "w-5 h-5" }
                    "Delete Selected ({selected_count})"
                }
            }
            if let Some(message) = error {
                ErrorBanner { message, on_dismiss: on_dismiss_error }
            }
            if files.is_empty() {
                div { class: "text-gray-400 text-center py-8", "No files" }
            } else {
                div { class: "w-full space-y-4",
                    for (id, file, is_selected, is_deleting) in rows {
                        FileCard {
                            key: "{id}",
                            selected: is_selected,
                            deleting: is_deleting,
                            file,
                            on_toggle,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}
