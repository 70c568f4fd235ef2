mod app;
pub mod app_context;
pub mod app_service;
pub mod display_types;

pub use app::launch_app;
