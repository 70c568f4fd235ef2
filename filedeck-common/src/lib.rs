//! filedeck-common - Pure data types shared by the store and the UI
//!
//! No I/O and no async here. The store in filedeck-core wraps [`FileList`]
//! with id generation and simulated remote calls.

mod file_list;
mod file_record;
mod size;

pub use file_list::*;
pub use file_record::*;
pub use size::*;
