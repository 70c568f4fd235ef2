//! Store types for UI state management
//!
//! Derive `Store` for fine-grained reactivity via lensing. The desktop app
//! projects the file list store into these after every mutation.

pub mod file_list;

pub use file_list::*;
