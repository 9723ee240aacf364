use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use dashboard_core::{
    navigation::sidebar_visible, Alert, CandidateCard, DashboardController, MenuItem, Settings,
    StatTile,
};
use eframe::egui;
use shared::domain::FilterTag;

use crate::controller::{
    events::UiIntent,
    orchestration::{apply_intent, dispatch_intent},
};
use crate::ui::theme::{self, Palette};

const CARD_WIDTH: f32 = 280.0;
const CARD_SPACING: f32 = 12.0;
const SIDEBAR_WIDTH: f32 = 200.0;
const NOTIFICATIONS_WIDTH: f32 = 320.0;
const NOTIFICATIONS_MAX_HEIGHT: f32 = 400.0;
const REVEAL_FADE_SECS: f64 = 0.3;

pub struct DashboardApp {
    controller: DashboardController,
    intent_tx: Sender<UiIntent>,
    intent_rx: Receiver<UiIntent>,
    settings: Settings,
    palette: Palette,
    theme_applied: bool,

    search_input: String,
    stats: Vec<StatTile>,
    stats_started_at: Option<f64>,
    // (grid generation, time the grid was first drawn)
    grid_shown_at: (u64, f64),
    sidebar_shown: Option<bool>,

    bell_rect: Option<egui::Rect>,
    notifications_rect: Option<egui::Rect>,
    focus_job_title: bool,

    status: String,
}

impl DashboardApp {
    pub fn new(settings: Settings, intent_tx: Sender<UiIntent>, intent_rx: Receiver<UiIntent>) -> Self {
        let controller = DashboardController::initialize(&settings);
        let stats = controller.stats();
        Self {
            controller,
            intent_tx,
            intent_rx,
            settings,
            palette: Palette::default(),
            theme_applied: false,
            search_input: String::new(),
            stats,
            stats_started_at: None,
            grid_shown_at: (0, 0.0),
            sidebar_shown: None,
            bell_rect: None,
            notifications_rect: None,
            focus_job_title: false,
            status: String::new(),
        }
    }

    fn process_intents(&mut self) -> bool {
        let mut applied = false;
        while let Ok(intent) = self.intent_rx.try_recv() {
            apply_intent(&mut self.controller, intent);
            applied = true;
        }
        applied
    }

    fn detect_outside_click(&self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        if !self.controller.is_notifications_open() {
            return;
        }
        let clicked_at = ctx.input(|i| {
            if i.pointer.any_click() {
                i.pointer.interact_pos()
            } else {
                None
            }
        });
        let Some(pos) = clicked_at else {
            return;
        };
        let inside_panel = self.notifications_rect.is_some_and(|rect| rect.contains(pos));
        let on_trigger = self.bell_rect.is_some_and(|rect| rect.contains(pos));
        if !inside_panel && !on_trigger {
            intents.push(UiIntent::PointerOutsideNotifications);
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("TalentLens")
                        .strong()
                        .size(20.0)
                        .color(self.palette.primary),
                );
                ui.add_space(16.0);

                let search = ui.add_sized(
                    [320.0, 24.0],
                    egui::TextEdit::singleline(&mut self.search_input)
                        .hint_text("Search candidates, roles or skills"),
                );
                if search.changed() {
                    intents.push(UiIntent::SearchChanged(self.search_input.clone()));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("👤").on_hover_text("Profile").clicked() {
                        intents.push(UiIntent::AvatarClicked);
                    }

                    let bell = ui.button("🔔").on_hover_text("Notifications");
                    if bell.clicked() {
                        intents.push(UiIntent::ToggleNotifications);
                    }
                    if let Some(count) = self.controller.badge_count() {
                        paint_badge(ui, bell.rect, count, self.palette.danger);
                    }
                    self.bell_rect = Some(bell.rect);

                    let post_job = egui::Button::new(
                        egui::RichText::new("+ Post Job").color(egui::Color32::WHITE),
                    )
                    .fill(self.palette.primary);
                    if ui.add(post_job).clicked() {
                        self.focus_job_title = true;
                    }
                });
            });
            if !self.status.is_empty() {
                ui.label(egui::RichText::new(&self.status).color(self.palette.danger));
            }
            ui.add_space(6.0);
        });
    }

    fn show_sidebar(&self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                for item in MenuItem::ALL {
                    let selected = self.controller.navigation().is_active(item);
                    let button = egui::Button::new(item.label()).selected(selected);
                    if ui
                        .add_sized([SIDEBAR_WIDTH - 16.0, 30.0], button)
                        .clicked()
                    {
                        intents.push(UiIntent::Navigate(item));
                    }
                }
            });
    }

    fn show_main(&mut self, ctx: &egui::Context, now: f64, intents: &mut Vec<UiIntent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .show(ui, |ui| {
                    self.show_stats(ui, now);
                    ui.add_space(16.0);
                    self.show_filter_tabs(ui, intents);
                    ui.add_space(8.0);
                    self.show_candidate_grid(ui, now, intents);
                    ui.add_space(24.0);
                    self.show_job_form(ui, intents);
                });
        });
    }

    fn show_stats(&mut self, ui: &mut egui::Ui, now: f64) {
        let started_at = *self.stats_started_at.get_or_insert(now);
        let elapsed = Duration::from_secs_f64((now - started_at).max(0.0));
        let palette = self.palette;

        ui.horizontal_wrapped(|ui| {
            for tile in &mut self.stats {
                tile.advance_to(elapsed);
                egui::Frame::group(ui.style())
                    .fill(palette.card_background)
                    .corner_radius(10.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_min_width(160.0);
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(tile.display())
                                    .size(26.0)
                                    .strong()
                                    .color(palette.primary),
                            );
                            ui.label(egui::RichText::new(&tile.label).color(palette.muted));
                        });
                    });
            }
        });
    }

    fn show_filter_tabs(&self, ui: &mut egui::Ui, intents: &mut Vec<UiIntent>) {
        ui.horizontal(|ui| {
            for tag in FilterTag::ALL {
                let selected = self.controller.active_filter() == tag;
                if ui
                    .add(egui::Button::new(tag.tab_label()).selected(selected))
                    .clicked()
                {
                    intents.push(UiIntent::FilterTabClicked(tag.tab_label()));
                }
            }
        });
    }

    fn show_candidate_grid(&mut self, ui: &mut egui::Ui, now: f64, intents: &mut Vec<UiIntent>) {
        let generation = self.controller.grid_generation();
        if self.grid_shown_at.0 != generation {
            self.grid_shown_at = (generation, now);
        }
        let since_shown = now - self.grid_shown_at.1;
        let palette = self.palette;
        let cards = self.controller.grid();

        if cards.is_empty() {
            ui.label(
                egui::RichText::new("No candidates match your search.").color(palette.muted),
            );
            return;
        }

        let columns = ((ui.available_width() + CARD_SPACING) / (CARD_WIDTH + CARD_SPACING))
            .floor()
            .max(1.0) as usize;

        egui::Grid::new("candidate_grid")
            .spacing([CARD_SPACING, CARD_SPACING])
            .show(ui, |ui| {
                for (index, card) in cards.iter().enumerate() {
                    let alpha = reveal_alpha(since_shown, card.reveal_delay_ms);
                    if let Some(intent) = show_candidate_card(ui, card, &palette, alpha) {
                        intents.push(intent);
                    }
                    if (index + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn show_job_form(&mut self, ui: &mut egui::Ui, intents: &mut Vec<UiIntent>) {
        let focus_title = std::mem::take(&mut self.focus_job_title);
        let form = self.controller.job_form_mut();

        egui::Frame::group(ui.style())
            .fill(self.palette.card_background)
            .corner_radius(10.0)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.heading("Post a New Job");
                ui.add_space(8.0);
                egui::Grid::new("job_form")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Job Title *");
                        let title = ui.add(
                            egui::TextEdit::singleline(&mut form.title)
                                .id(egui::Id::new("job_title_input"))
                                .desired_width(360.0),
                        );
                        if focus_title {
                            title.request_focus();
                            title.scroll_to_me(Some(egui::Align::Center));
                        }
                        ui.end_row();

                        ui.label("Department *");
                        ui.add(egui::TextEdit::singleline(&mut form.department).desired_width(360.0));
                        ui.end_row();

                        ui.label("Description *");
                        ui.add(
                            egui::TextEdit::multiline(&mut form.description)
                                .desired_rows(4)
                                .desired_width(360.0),
                        );
                        ui.end_row();

                        ui.label("Required Skills");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.skills)
                                .hint_text("Comma separated")
                                .desired_width(360.0),
                        );
                        ui.end_row();

                        ui.label("Experience");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.experience)
                                .hint_text("e.g. 3+ years")
                                .desired_width(360.0),
                        );
                        ui.end_row();
                    });
                ui.add_space(8.0);
                if ui.button("Post Job").clicked() {
                    intents.push(UiIntent::SubmitJobPosting);
                }
            });
    }

    fn show_notifications(&mut self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        if !self.controller.is_notifications_open() {
            self.notifications_rect = None;
            return;
        }
        let Some(bell) = self.bell_rect else {
            return;
        };

        let palette = self.palette;
        let notifications = self.controller.notifications();
        let pos = egui::pos2(bell.right() - NOTIFICATIONS_WIDTH, bell.bottom() + 10.0);

        let area = egui::Area::new(egui::Id::new("notifications_dropdown"))
            .order(egui::Order::Foreground)
            .fixed_pos(pos)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).inner_margin(12.0).show(ui, |ui| {
                    ui.set_width(NOTIFICATIONS_WIDTH);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("Notifications").strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Clear All").clicked() {
                                intents.push(UiIntent::ClearNotifications);
                            }
                        });
                    });
                    ui.separator();

                    if notifications.is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(12.0);
                            ui.label(egui::RichText::new("No notifications").color(palette.muted));
                            ui.add_space(12.0);
                        });
                        return;
                    }

                    egui::ScrollArea::vertical()
                        .max_height(NOTIFICATIONS_MAX_HEIGHT)
                        .show(ui, |ui| {
                            for notification in notifications {
                                let fill = if notification.read {
                                    palette.card_background
                                } else {
                                    palette.unread_background
                                };
                                egui::Frame::new()
                                    .fill(fill)
                                    .corner_radius(8.0)
                                    .inner_margin(10.0)
                                    .show(ui, |ui| {
                                        ui.set_width(ui.available_width());
                                        ui.label(notification.text.as_str());
                                        ui.label(
                                            egui::RichText::new(&notification.time)
                                                .small()
                                                .color(palette.muted),
                                        );
                                    });
                                ui.add_space(8.0);
                            }
                        });
                });
            });
        self.notifications_rect = Some(area.response.rect);
    }

    fn show_alert(&self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        let Some(alert) = self.controller.alert() else {
            return;
        };
        let title = match alert {
            Alert::Profile(_) => "Candidate Profile",
            Alert::ValidationFailed(_) => "Missing Information",
            Alert::JobPosted => "Job Posted",
            Alert::Info(_) => "Notice",
        };
        let body = alert.to_string();

        let modal = egui::Modal::new(egui::Id::new("dashboard_alert")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.heading(title);
            ui.add_space(8.0);
            ui.label(body);
            ui.add_space(12.0);
            ui.button("OK").clicked()
        });
        if modal.inner || modal.should_close() {
            intents.push(UiIntent::DismissAlert);
        }
    }

    fn update_sidebar_visibility(&mut self, ctx: &egui::Context) -> bool {
        let width = ctx
            .input(|i| i.viewport().inner_rect)
            .map_or_else(|| ctx.available_rect().width(), |rect| rect.width());
        let visible = sidebar_visible(width, self.settings.sidebar_breakpoint);
        if self.sidebar_shown != Some(visible) {
            tracing::debug!(width, visible, "sidebar visibility changed");
            self.sidebar_shown = Some(visible);
        }
        visible
    }

    fn is_animating(&self, now: f64) -> bool {
        let stats_animating = self.stats.iter().any(StatTile::is_animating);
        let since_shown = now - self.grid_shown_at.1;
        let cards_revealing = self
            .controller
            .grid()
            .iter()
            .any(|card| reveal_alpha(since_shown, card.reveal_delay_ms) < 1.0);
        stats_animating || cards_revealing
    }
}

fn reveal_alpha(since_shown_secs: f64, delay_ms: u64) -> f32 {
    let delay_secs = delay_ms as f64 / 1000.0;
    ((since_shown_secs - delay_secs) / REVEAL_FADE_SECS).clamp(0.0, 1.0) as f32
}

fn paint_badge(ui: &egui::Ui, anchor: egui::Rect, count: usize, fill: egui::Color32) {
    let center = anchor.right_top() + egui::vec2(-2.0, 2.0);
    let painter = ui.painter();
    painter.circle_filled(center, 9.0, fill);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        count.to_string(),
        egui::FontId::proportional(10.0),
        egui::Color32::WHITE,
    );
}

fn show_candidate_card(
    ui: &mut egui::Ui,
    card: &CandidateCard,
    palette: &Palette,
    alpha: f32,
) -> Option<UiIntent> {
    let mut intent = None;
    ui.scope(|ui| {
        ui.set_opacity(alpha);
        egui::Frame::group(ui.style())
            .fill(palette.card_background)
            .corner_radius(10.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&card.name).strong().size(16.0));
                        ui.label(egui::RichText::new(&card.title).color(palette.muted));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        let (fill, text) = palette.tier_colors(card.match_tier);
                        egui::Frame::new()
                            .fill(fill)
                            .corner_radius(12.0)
                            .inner_margin(egui::vec2(8.0, 4.0))
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(card.match_badge()).strong().color(text))
                                    .on_hover_text(card.match_tier.label());
                            });
                    });
                });

                ui.add_space(6.0);
                ui.label(egui::RichText::new("Top Skills:").small().strong());
                ui.horizontal_wrapped(|ui| {
                    for skill in &card.skills {
                        egui::Frame::new()
                            .fill(palette.skill_background)
                            .corner_radius(6.0)
                            .inner_margin(egui::vec2(6.0, 2.0))
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(skill).small().color(palette.primary));
                            });
                    }
                });

                if let Some(warning) = &card.ai_warning {
                    ui.add_space(6.0);
                    egui::Frame::new()
                        .fill(palette.warning_background)
                        .corner_radius(6.0)
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(format!("⚠ {warning}")).color(palette.warning_text),
                            );
                        });
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.link("View Profile").clicked() {
                        intent = Some(UiIntent::ViewProfile(card.candidate_id));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&card.experience_label).color(palette.muted));
                    });
                });
            });
    });
    intent
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            ctx.set_visuals(theme::visuals(&self.palette));
            self.theme_applied = true;
        }

        self.process_intents();
        let now = ctx.input(|i| i.time);
        let mut intents = Vec::new();

        self.detect_outside_click(ctx, &mut intents);
        self.show_top_bar(ctx, &mut intents);
        if self.update_sidebar_visibility(ctx) {
            self.show_sidebar(ctx, &mut intents);
        }
        self.show_main(ctx, now, &mut intents);
        self.show_notifications(ctx, &mut intents);
        self.show_alert(ctx, &mut intents);

        for intent in intents {
            dispatch_intent(&self.intent_tx, intent, &mut self.status);
        }
        if self.process_intents() {
            ctx.request_repaint();
        }
        if self.is_animating(now) {
            ctx.request_repaint_after(Duration::from_millis(16));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::reveal_alpha;

    #[test]
    fn cards_fade_in_after_their_stagger_delay() {
        assert_eq!(reveal_alpha(0.0, 0), 0.0);
        assert_eq!(reveal_alpha(0.3, 0), 1.0);
        assert_eq!(reveal_alpha(0.2, 220), 0.0);
        assert!((reveal_alpha(0.37, 220) - 0.5).abs() < 1e-3);
        assert_eq!(reveal_alpha(10.0, 550), 1.0);
    }
}
