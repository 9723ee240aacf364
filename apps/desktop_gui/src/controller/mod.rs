//! Controller layer: UI intents and their application to the dashboard state.

pub mod events;
pub mod orchestration;
