use eframe::egui::{self, Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

use bazaar_core::OrderStatus;

pub const COL_BG: Color32 = Color32::from_rgb(12, 14, 18);
pub const COL_BG_DARK: Color32 = Color32::from_rgb(18, 21, 27);
pub const COL_BORDER: Color32 = Color32::from_rgb(38, 43, 52);
pub const COL_TEXT: Color32 = Color32::from_rgb(229, 231, 235);
pub const COL_TEXT_DIM: Color32 = Color32::from_rgb(148, 155, 166);
pub const COL_ACCENT: Color32 = Color32::from_rgb(52, 211, 153);
pub const COL_WARN: Color32 = Color32::from_rgb(250, 204, 21);
pub const COL_DANGER: Color32 = Color32::from_rgb(239, 68, 68);
pub const COL_SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const COL_INFO: Color32 = Color32::from_rgb(96, 165, 250);

pub fn setup(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = COL_BG_DARK;
    visuals.panel_fill = COL_BG;

    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, COL_BORDER);
    visuals.widgets.inactive.bg_fill = COL_BG_DARK;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, COL_TEXT_DIM);

    visuals.widgets.hovered.bg_fill = COL_ACCENT.linear_multiply(0.1);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, COL_ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, COL_ACCENT);

    visuals.widgets.active.bg_fill = COL_ACCENT;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, COL_BG);

    visuals.selection.bg_fill = COL_ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, COL_ACCENT);

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = [
        (TextStyle::Heading, FontId::new(16.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (
            TextStyle::Monospace,
            FontId::new(11.0, FontFamily::Monospace),
        ),
        (TextStyle::Button, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(10.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(6.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(8);
    style.visuals.button_frame = true;

    ctx.set_style(style);
}

pub fn status_color(status: OrderStatus) -> Color32 {
    match status {
        OrderStatus::Pending => COL_WARN,
        OrderStatus::Processing => COL_INFO,
        OrderStatus::Completed => COL_SUCCESS,
        OrderStatus::Cancelled => COL_DANGER,
        OrderStatus::Refunded => COL_TEXT_DIM,
    }
}

pub fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}
