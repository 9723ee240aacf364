//! Colors and visuals for the dashboard window.

use eframe::egui;
use shared::domain::MatchTier;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: egui::Color32,
    pub danger: egui::Color32,
    pub muted: egui::Color32,
    pub app_background: egui::Color32,
    pub card_background: egui::Color32,
    pub skill_background: egui::Color32,
    pub warning_background: egui::Color32,
    pub warning_text: egui::Color32,
    pub unread_background: egui::Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: egui::Color32::from_rgb(79, 70, 229),
            danger: egui::Color32::from_rgb(239, 68, 68),
            muted: egui::Color32::from_rgb(107, 114, 128),
            app_background: egui::Color32::from_rgb(246, 247, 251),
            card_background: egui::Color32::WHITE,
            skill_background: egui::Color32::from_rgb(238, 240, 255),
            warning_background: egui::Color32::from_rgb(254, 243, 199),
            warning_text: egui::Color32::from_rgb(146, 64, 14),
            unread_background: egui::Color32::from_rgba_unmultiplied(79, 70, 229, 13),
        }
    }
}

impl Palette {
    pub fn tier_colors(&self, tier: MatchTier) -> (egui::Color32, egui::Color32) {
        match tier {
            MatchTier::High => (
                egui::Color32::from_rgb(220, 252, 231),
                egui::Color32::from_rgb(22, 101, 52),
            ),
            MatchTier::Medium => (
                egui::Color32::from_rgb(254, 249, 195),
                egui::Color32::from_rgb(133, 77, 14),
            ),
            MatchTier::Low => (
                egui::Color32::from_rgb(254, 226, 226),
                egui::Color32::from_rgb(153, 27, 27),
            ),
        }
    }
}

pub fn visuals(palette: &Palette) -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = palette.app_background;
    visuals.window_fill = palette.card_background;
    visuals.hyperlink_color = palette.primary;
    visuals.selection.bg_fill = palette.primary;
    visuals.widgets.active.bg_fill = palette.primary;
    visuals.widgets.hovered.bg_fill = palette.primary.gamma_multiply(0.85);
    visuals
}
