use crate::theme::*;
use bazaar_app_core::viewmodel::AlertVm;
use bazaar_core::{AlertId, AlertKind};
use eframe::egui;

/// Draws the alert stack in the top-right corner. Returns alerts whose close
/// control was clicked.
pub fn show(ctx: &egui::Context, alerts: &[AlertVm]) -> Vec<AlertId> {
    let mut closed = Vec::new();
    if alerts.is_empty() {
        return closed;
    }

    egui::Area::new(egui::Id::new("alert_stack"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 40.0))
        .order(egui::Order::Foreground)
        .interactable(true)
        .show(ctx, |ui| {
            ui.set_width(300.0);
            for alert in alerts {
                if card(ui, alert) {
                    closed.push(alert.id);
                }
            }
        });

    closed
}

fn card(ui: &mut egui::Ui, alert: &AlertVm) -> bool {
    let accent = rgb(alert.accent_rgb);
    let opacity = if alert.exiting { 0.4 } else { 1.0 };
    let mut close_clicked = false;

    ui.scope(|ui| {
        ui.set_opacity(opacity);
        egui::Frame::new()
            .fill(COL_BG_DARK)
            .stroke(egui::Stroke::new(1.0, accent))
            .corner_radius(4.0)
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    if alert.kind == AlertKind::Loading {
                        ui.add(egui::Spinner::new().size(14.0).color(accent));
                    } else {
                        ui.label(egui::RichText::new(alert.icon).size(14.0).color(accent));
                    }
                    ui.vertical(|ui| {
                        if let Some(title) = &alert.title {
                            ui.label(egui::RichText::new(title).strong().color(COL_TEXT));
                        }
                        ui.label(egui::RichText::new(&alert.message).size(12.0).color(COL_TEXT));
                    });
                    if alert.closable {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            close_clicked = ui
                                .small_button(egui::RichText::new("\u{2715}").color(COL_TEXT_DIM))
                                .clicked();
                        });
                    }
                });
            });
    });

    close_clicked
}
