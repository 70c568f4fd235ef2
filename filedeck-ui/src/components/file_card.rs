//! One file in the list

use crate::components::icons::{LoaderIcon, TrashIcon};
use crate::components::utils::{format_modified_date, format_size_kb};
use crate::components::ChromelessButton;
use crate::display_types::FileRow;
use dioxus::prelude::*;

/// Card for a single file. Clicking the card toggles selection; the trash
/// button deletes without toggling.
#[component]
pub fn FileCard(
    file: FileRow,
    selected: bool,
    deleting: bool,
    on_toggle: EventHandler<u64>,
    on_delete: EventHandler<u64>,
) -> Element {
    let id = file.id;
    let ring = if selected { "ring-2 ring-indigo-500" } else { "" };
    let fade = if deleting { "opacity-50" } else { "" };

    rsx! {
        div {
            class: "bg-white/10 backdrop-blur-lg border border-gray-700 rounded-lg p-3 sm:p-4 shadow-lg hover:shadow-xl transition-all duration-300 cursor-pointer {ring} {fade}",
            "aria-selected": if selected { "true" } else { "false" },
            onclick: move |_| on_toggle.call(id),
            div { class: "flex flex-col sm:flex-row justify-between items-start sm:items-center gap-2",
                div { class: "flex items-center gap-3",
                    div { class: "w-10 h-10 rounded-full bg-indigo-500 flex items-center justify-center flex-shrink-0",
                        span { class: "text-white font-semibold text-lg", "{file.initial}" }
                    }
                    div {
                        p { class: "text-base sm:text-lg font-medium text-white", "{file.name}" }
                        p {
                            class: "text-xs sm:text-sm text-gray-400",
                            title: "{file.type_label}",
                            "{file.content_type}"
                        }
                    }
                }
                div { class: "flex items-center gap-4 w-full sm:w-auto justify-between sm:justify-start",
                    div { class: "text-right",
                        p { class: "text-xs sm:text-sm text-gray-400",
                            {format_modified_date(file.last_modified_ms)}
                        }
                        p { class: "text-xs sm:text-sm font-medium text-indigo-400",
                            {format_size_kb(file.size_bytes)}
                        }
                    }
                    if deleting {
                        LoaderIcon { class: "w-5 h-5 text-gray-400 animate-spin" }
                    } else {
                        ChromelessButton {
                            class: Some("text-red-500 hover:text-red-600 transition-colors duration-300".to_string()),
                            aria_label: Some("Delete file".to_string()),
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_delete.call(id);
                            },
                            TrashIcon { class: "w-5 h-5" }
                        }
                    }
                }
            }
        }
    }
}
