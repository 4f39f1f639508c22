mod card;
mod theme;

pub use card::{card_ui, paint_fallback_icon, CARD_SIZE};
pub use theme::{visuals_for_mode, Palette};

use crate::bookmarks::BookmarkGroup;
use crate::card::{Card, IconState};
use crate::dashboard::Dashboard;
use crate::favicon::FaviconLoader;
use crate::launcher::open_card;
use crate::settings::Settings;
use crate::shortcuts::{Shortcut, ShortcutHandler};
use crate::theme::{PreferenceStore, ThemeController, ThemeMode};
use eframe::egui;
use std::collections::HashMap;

pub const SEARCH_INPUT_ID: &str = "search_input";

/// Whether the platform asks for a dark appearance. Platforms that report
/// nothing keep whatever the current visuals are.
fn system_prefers_dark(system_theme: Option<eframe::Theme>, visuals_dark: bool) -> bool {
    system_theme
        .map(|t| t == eframe::Theme::Dark)
        .unwrap_or(visuals_dark)
}

/// Select the whole content of the text edit `id`.
fn select_all(ctx: &egui::Context, id: egui::Id, text: &str) {
    let mut state = egui::widgets::text_edit::TextEditState::load(ctx, id).unwrap_or_default();
    state.cursor.set_char_range(Some(egui::text::CCursorRange::two(
        egui::text::CCursor::new(0),
        egui::text::CCursor::new(text.chars().count()),
    )));
    state.store(ctx, id);
}

pub struct DashboardApp<S: PreferenceStore> {
    pub query: String,
    dashboard: Dashboard,
    theme: ThemeController<S>,
    shortcuts: ShortcutHandler,
    favicons: Option<FaviconLoader>,
    textures: HashMap<String, egui::TextureHandle>,
    error: Option<String>,
}

impl<S: PreferenceStore> DashboardApp<S> {
    pub fn new(
        groups: &[BookmarkGroup],
        settings: &Settings,
        store: S,
        favicons: Option<FaviconLoader>,
    ) -> Self {
        let mut dashboard = Dashboard::new(settings.favicon_size);
        dashboard.render_groups(groups);
        let mut theme = ThemeController::new(store);
        theme.apply_saved_theme();
        Self {
            query: String::new(),
            dashboard,
            theme,
            shortcuts: ShortcutHandler,
            favicons,
            textures: HashMap::new(),
            error: None,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn theme(&self) -> &ThemeController<S> {
        &self.theme
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.search();
    }

    pub fn search(&mut self) {
        self.dashboard.filter(&self.query);
    }

    pub fn toggle_theme(&mut self, system_prefers_dark: bool) -> ThemeMode {
        let mode = self.theme.toggle(system_prefers_dark);
        tracing::info!("theme switched to {}", mode.as_str());
        mode
    }

    /// Open the first visible card, if any.
    pub fn activate_first_visible(&mut self) -> Option<Card> {
        let card = self.dashboard.first_visible()?.clone();
        self.activate(&card);
        Some(card)
    }

    fn activate(&mut self, card: &Card) {
        match open_card(card) {
            Ok(()) => self.error = None,
            Err(e) => {
                tracing::error!("failed to open {}: {e}", card.url);
                self.error = Some(format!("Failed to open {}: {e}", card.name));
            }
        }
    }

    fn apply_visuals(&self, ctx: &egui::Context, mode: ThemeMode) {
        let visuals = visuals_for_mode(mode);
        if ctx.style().visuals != visuals {
            ctx.set_visuals(visuals);
        }
    }

    fn receive_favicons(&mut self, ctx: &egui::Context) {
        let Some(loader) = &mut self.favicons else {
            return;
        };
        for result in loader.poll() {
            match result.image {
                Ok(image) => {
                    let tex = ctx.load_texture(
                        format!("favicon:{}", result.card_url),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(result.card_url.clone(), tex);
                    self.dashboard.resolve_icon(&result.card_url, true);
                }
                Err(_) => {
                    self.dashboard.resolve_icon(&result.card_url, false);
                }
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context, search_id: egui::Id) {
        let search_focused = ctx.memory(|m| m.has_focus(search_id));
        for shortcut in self.shortcuts.process(ctx, search_focused) {
            match shortcut {
                Shortcut::FocusSearch => {
                    ctx.memory_mut(|m| m.request_focus(search_id));
                    select_all(ctx, search_id, &self.query);
                }
                Shortcut::ActivateFirstVisible => {
                    self.activate_first_visible();
                }
            }
        }
    }

    fn groups_ui(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let mut clicked: Option<Card> = None;
        let mut wanted: Vec<(String, String)> = Vec::new();

        for section in self.dashboard.sections().iter().filter(|s| s.is_visible()) {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&section.label).strong().size(16.0));
                egui::Frame::none()
                    .fill(palette.badge_fill)
                    .rounding(egui::Rounding::same(8.0))
                    .inner_margin(egui::Margin::symmetric(8.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(section.count_label())
                                .small()
                                .color(palette.muted_text),
                        );
                    });
            });
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for card in section.visible_cards() {
                    let resp = card_ui(ui, card, self.textures.get(&card.url), palette);
                    if card.icon == IconState::Pending && ui.is_rect_visible(resp.rect) {
                        wanted.push((card.url.clone(), card.favicon_url.clone()));
                    }
                    if resp.clicked() {
                        clicked = Some(card.clone());
                    }
                }
            });
            ui.add_space(18.0);
        }

        if let Some(loader) = &mut self.favicons {
            for (url, favicon_url) in wanted {
                loader.request(&url, &favicon_url);
            }
        }
        if let Some(card) = clicked {
            self.activate(&card);
        }
    }
}

impl<S: PreferenceStore> eframe::App for DashboardApp<S> {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let system_dark =
            system_prefers_dark(frame.info().system_theme, ctx.style().visuals.dark_mode);
        let mode = self.theme.effective(system_dark);
        self.apply_visuals(ctx, mode);
        let palette = Palette::for_mode(mode);

        self.receive_favicons(ctx);

        let search_id = egui::Id::new(SEARCH_INPUT_ID);
        self.handle_shortcuts(ctx, search_id);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading("Links");
                let toggle_label = match mode {
                    ThemeMode::Dark => "☀ Light",
                    ThemeMode::Light => "🌙 Dark",
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(toggle_label).clicked() {
                        self.toggle_theme(system_dark);
                    }
                    let input = ui.add(
                        egui::TextEdit::singleline(&mut self.query)
                            .id(search_id)
                            .hint_text("Search links… ( / )")
                            .desired_width(f32::INFINITY),
                    );
                    if input.changed() {
                        self.search();
                    }
                });
            });
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err);
            }
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    if self.dashboard.first_visible().is_none() {
                        ui.label(egui::RichText::new("No links match.").color(palette.muted_text));
                    }
                    self.groups_ui(ui, &palette);
                });
        });
    }
}
