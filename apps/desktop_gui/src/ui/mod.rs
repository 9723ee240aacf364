//! UI layer for the dashboard window: app shell, panels and theme.

pub mod app;
pub mod theme;

pub use app::DashboardApp;
