mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::bounded;
use dashboard_core::load_settings;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::controller::events::UiIntent;
use crate::ui::DashboardApp;

const INTENT_QUEUE_CAPACITY: usize = 256;

fn main() -> Result<()> {
    let settings = load_settings().context("failed to load dashboard settings")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let (intent_tx, intent_rx) = bounded::<UiIntent>(INTENT_QUEUE_CAPACITY);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TalentLens Recruiting Dashboard")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    tracing::info!("starting recruiting dashboard");
    eframe::run_native(
        "TalentLens Recruiting Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(settings, intent_tx, intent_rx)))),
    )
    .map_err(|err| anyhow!("dashboard window failed: {err}"))
}
