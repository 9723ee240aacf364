//! Headless core of the talent dashboard; render adapters drive a
//! [`DashboardController`] and draw what it exposes.

pub mod cards;
pub mod config;
mod controller;
pub mod count_up;
pub mod filter;
pub mod job_posting;
pub mod navigation;
pub mod notifications;
pub mod seed;

pub use cards::{CandidateCard, ProfileSummary};
pub use config::{load_settings, Settings};
pub use controller::{Alert, DashboardController, AVATAR_MENU_MESSAGE};
pub use count_up::{CountUp, CountUpTiming, StatTile};
pub use navigation::MenuItem;
pub use notifications::{BadgeChange, PanelToggle, PointerTarget};
