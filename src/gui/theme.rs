use crate::theme::ThemeMode;
use eframe::egui;

/// Colors used by the dashboard for one appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window_fill: egui::Color32,
    pub panel_fill: egui::Color32,
    pub card_fill: egui::Color32,
    pub card_stroke: egui::Color32,
    pub text: egui::Color32,
    pub muted_text: egui::Color32,
    pub badge_fill: egui::Color32,
    pub hyperlink: egui::Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            window_fill: egui::Color32::from_rgb(15, 17, 21),
            panel_fill: egui::Color32::from_rgb(15, 17, 21),
            card_fill: egui::Color32::from_rgb(24, 27, 33),
            card_stroke: egui::Color32::from_rgb(42, 46, 55),
            text: egui::Color32::from_rgb(230, 232, 238),
            muted_text: egui::Color32::from_rgb(150, 156, 170),
            badge_fill: egui::Color32::from_rgb(35, 39, 47),
            hyperlink: egui::Color32::from_rgb(120, 170, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            window_fill: egui::Color32::from_rgb(245, 246, 250),
            panel_fill: egui::Color32::from_rgb(245, 246, 250),
            card_fill: egui::Color32::from_rgb(255, 255, 255),
            card_stroke: egui::Color32::from_rgb(222, 225, 232),
            text: egui::Color32::from_rgb(24, 26, 32),
            muted_text: egui::Color32::from_rgb(100, 106, 120),
            badge_fill: egui::Color32::from_rgb(232, 234, 240),
            hyperlink: egui::Color32::from_rgb(35, 102, 214),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

pub fn visuals_for_mode(mode: ThemeMode) -> egui::Visuals {
    let palette = Palette::for_mode(mode);
    let mut visuals = match mode {
        ThemeMode::Dark => egui::Visuals::dark(),
        ThemeMode::Light => egui::Visuals::light(),
    };
    visuals.window_fill = palette.window_fill;
    visuals.panel_fill = palette.panel_fill;
    visuals.override_text_color = Some(palette.text);
    visuals.hyperlink_color = palette.hyperlink;
    visuals.widgets.noninteractive.bg_fill = palette.panel_fill;
    visuals.widgets.inactive.bg_fill = palette.badge_fill;
    visuals.widgets.inactive.weak_bg_fill = palette.badge_fill;
    visuals.extreme_bg_color = palette.card_fill;
    visuals
}
