//! filedeck-ui - UI state and pure view components for filedeck
//!
//! Components take state and callbacks as props; they never touch the
//! file list store directly.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
