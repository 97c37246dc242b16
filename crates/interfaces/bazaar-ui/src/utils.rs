use crate::theme::*;
use eframe::egui;
use eframe::egui::Color32;

pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(COL_TEXT_DIM)
            .family(egui::FontFamily::Monospace)
            .strong(),
    );
}

pub fn cmd_button(ui: &mut egui::Ui, label: &str, variant: &str, enabled: bool) -> egui::Response {
    let (fill, stroke_col, text_col) = match variant {
        "primary" => (COL_ACCENT, COL_ACCENT, COL_BG_DARK),
        "danger" => (Color32::TRANSPARENT, COL_DANGER, COL_DANGER),
        _ => (Color32::TRANSPARENT, COL_ACCENT, COL_ACCENT),
    };

    let text = egui::RichText::new(label)
        .size(11.0)
        .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(72.0, 22.0))
        .fill(if enabled && variant == "primary" {
            fill
        } else {
            Color32::TRANSPARENT
        })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { stroke_col } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// Small rounded label, e.g. an order status.
pub fn pill(ui: &mut egui::Ui, text: &str, color: Color32) -> egui::Response {
    egui::Frame::new()
        .fill(color.linear_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(10.0).color(color));
        })
        .response
}
