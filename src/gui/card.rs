use super::theme::Palette;
use crate::card::{Card, IconState};
use eframe::egui;

pub const CARD_SIZE: egui::Vec2 = egui::vec2(230.0, 64.0);
const ICON_SIZE: f32 = 32.0;
const STRIPE_WIDTH: f32 = 4.0;

/// Paint one card and return its response. `texture` is the decoded favicon
/// when the icon has loaded.
pub fn card_ui(
    ui: &mut egui::Ui,
    card: &Card,
    texture: Option<&egui::TextureHandle>,
    palette: &Palette,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let accent = card.accent.to_color32();
    let hovered = response.hovered() || response.has_focus();
    let painter = ui.painter_at(rect);
    let rounding = egui::Rounding::same(10.0);

    let stroke_color = if hovered { accent } else { palette.card_stroke };
    painter.rect(
        rect.shrink(0.5),
        rounding,
        palette.card_fill,
        egui::Stroke::new(1.0, stroke_color),
    );
    let stripe = egui::Rect::from_min_size(rect.min, egui::vec2(STRIPE_WIDTH, rect.height()));
    painter.rect_filled(
        stripe,
        egui::Rounding {
            nw: 10.0,
            sw: 10.0,
            ne: 0.0,
            se: 0.0,
        },
        accent,
    );

    let icon_rect = egui::Rect::from_center_size(
        egui::pos2(rect.left() + 16.0 + ICON_SIZE / 2.0, rect.center().y),
        egui::vec2(ICON_SIZE, ICON_SIZE),
    );
    painter.rect_filled(
        icon_rect.expand(4.0),
        egui::Rounding::same(8.0),
        accent.gamma_multiply(0.18),
    );
    match (card.icon, texture) {
        (IconState::Loaded, Some(tex)) => {
            egui::Image::new((tex.id(), icon_rect.size())).paint_at(ui, icon_rect);
        }
        (IconState::Failed, _) | (IconState::Loaded, None) => {
            paint_fallback_icon(&painter, icon_rect.shrink(4.0), palette.text);
        }
        (IconState::Pending, _) => {}
    }

    let text_left = icon_rect.right() + 14.0;
    painter.text(
        egui::pos2(text_left, rect.center().y - 2.0),
        egui::Align2::LEFT_BOTTOM,
        &card.name,
        egui::FontId::proportional(15.0),
        palette.text,
    );
    painter.text(
        egui::pos2(text_left, rect.center().y + 2.0),
        egui::Align2::LEFT_TOP,
        &card.domain,
        egui::FontId::proportional(12.0),
        palette.muted_text,
    );

    response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(card.url.as_str())
}

/// Generic link glyph: a speech bubble with two text lines, drawn on a
/// 24x24 grid scaled into `rect`.
pub fn paint_fallback_icon(painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
    let scale = rect.width().min(rect.height()) / 24.0;
    let at = |x: f32, y: f32| rect.min + egui::vec2(x * scale, y * scale);
    let span = |x0: f32, y0: f32, x1: f32, y1: f32| egui::Rect::from_min_max(at(x0, y0), at(x1, y1));

    painter.rect_filled(span(2.0, 4.0, 22.0, 19.5), egui::Rounding::same(2.0 * scale), color);
    painter.add(egui::Shape::convex_polygon(
        vec![at(8.0, 19.0), at(12.5, 19.0), at(8.0, 22.0)],
        color,
        egui::Stroke::NONE,
    ));

    let line_color = if color.r() as u32 + color.g() as u32 + color.b() as u32 > 384 {
        egui::Color32::from_black_alpha(200)
    } else {
        egui::Color32::from_white_alpha(220)
    };
    painter.rect_filled(span(6.0, 8.0, 18.0, 10.0), egui::Rounding::ZERO, line_color);
    painter.rect_filled(span(6.0, 12.0, 16.0, 14.0), egui::Rounding::ZERO, line_color);
}
