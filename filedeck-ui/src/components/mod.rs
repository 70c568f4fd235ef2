//! Shared UI components

pub mod button;
pub mod error_banner;
pub mod file_card;
pub mod file_list;
pub mod icons;
pub mod utils;

pub use button::{Button, ButtonVariant, ChromelessButton};
pub use error_banner::ErrorBanner;
pub use file_card::FileCard;
pub use file_list::FileListView;
pub use icons::{AlertTriangleIcon, CheckIcon, LoaderIcon, PlusIcon, TrashIcon, XIcon};
pub use utils::{format_modified_date, format_modified_date_in, format_size_kb};
