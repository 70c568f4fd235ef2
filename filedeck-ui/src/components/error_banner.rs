//! Amber warning banner for a failed delete.

use crate::components::icons::{AlertTriangleIcon, XIcon};
use crate::components::ChromelessButton;
use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "bg-amber-900/30 border border-amber-700/50 rounded-lg p-4 mb-4",
            role: "alert",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-500 flex-shrink-0 mt-0.5" }
                div { class: "flex-1",
                    p { class: "text-sm font-medium text-amber-200 mb-1", "Delete failed" }
                    p { class: "text-sm text-gray-400 select-text break-words", "{message}" }
                }
                ChromelessButton {
                    class: Some("text-gray-400 hover:text-white".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon {}
                }
            }
        }
    }
}
