use crate::screens::dashboard::panel;
use crate::theme::*;
use crate::utils::{cmd_button, pill, section_label};
use bazaar_app_core::app_core::AppCommand;
use bazaar_app_core::viewmodel::{OrdersVm, SelectedOrderVm};
use bazaar_core::OrderStatus;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &OrdersVm, cmds: &mut Vec<AppCommand>) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(10.0),
        size: percent(1.),
        overflow: taffy::Point {
            x: taffy::Overflow::Hidden,
            y: taffy::Overflow::Scroll,
        },
        min_size: taffy::Size {
            width: length(0.0),
            height: length(0.0),
        },
        ..Default::default()
    })
    .add(|tui| {
        if let Some(sel) = &vm.selected {
            panel(&mut *tui, "SELECTED ORDER", |ui| selection(ui, sel, cmds));
        }

        panel(&mut *tui, "ORDERS", |ui| {
            if vm.rows.is_empty() {
                ui.label(
                    egui::RichText::new("No orders loaded. Refresh the dashboard to fetch recent orders.")
                        .color(COL_TEXT_DIM),
                );
                return;
            }
            egui::Grid::new("orders_table")
                .num_columns(6)
                .striped(true)
                .spacing(egui::vec2(16.0, 4.0))
                .show(ui, |ui| {
                    for h in ["ORDER", "STATUS", "ITEMS", "TOTAL", "DATE", ""] {
                        section_label(ui, h);
                    }
                    ui.end_row();

                    for row in &vm.rows {
                        let label = egui::RichText::new(format!("#{}", row.id)).color(if row.selected {
                            COL_ACCENT
                        } else {
                            COL_TEXT
                        });
                        if ui.selectable_label(row.selected, label).clicked() {
                            cmds.push(if row.selected {
                                AppCommand::ClearSelection
                            } else {
                                AppCommand::SelectOrder(row.id)
                            });
                        }
                        status_picker(ui, ("row_status", row.id.0), row.status, |status| {
                            cmds.push(AppCommand::UpdateOrderStatus { id: row.id, status })
                        });
                        ui.label(row.items.to_string());
                        ui.label(egui::RichText::new(&row.total).monospace());
                        ui.label(egui::RichText::new(&row.date).color(COL_TEXT_DIM));
                        if cmd_button(ui, "REMOVE", "danger", true).clicked() {
                            cmds.push(AppCommand::RemoveOrder(row.id));
                        }
                        ui.end_row();
                    }
                });
        });
    });
}

fn selection(ui: &mut egui::Ui, sel: &SelectedOrderVm, cmds: &mut Vec<AppCommand>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("Order #{}", sel.id))
                .size(14.0)
                .strong()
                .color(COL_TEXT),
        );
        pill(ui, sel.status_label, status_color(sel.status));
        if sel.detached {
            ui.label(
                egui::RichText::new("(restored, not in current list)")
                    .size(10.0)
                    .color(COL_TEXT_DIM),
            );
        }
    });
    ui.label(format!("{} items \u{00B7} {} \u{00B7} {}", sel.items, sel.total, sel.date));

    ui.horizontal(|ui| {
        for status in OrderStatus::ALL {
            let enabled = status != sel.status;
            if cmd_button(ui, &status.label().to_uppercase(), "outline", enabled).clicked() {
                cmds.push(AppCommand::UpdateOrderStatus { id: sel.id, status });
            }
        }
        if cmd_button(ui, "CLEAR", "danger", true).clicked() {
            cmds.push(AppCommand::ClearSelection);
        }
    });
}

fn status_picker(
    ui: &mut egui::Ui,
    id: impl std::hash::Hash,
    current: OrderStatus,
    mut on_change: impl FnMut(OrderStatus),
) {
    let mut picked = current;
    egui::ComboBox::from_id_salt(id)
        .selected_text(egui::RichText::new(current.label()).color(status_color(current)))
        .width(110.0)
        .show_ui(ui, |ui| {
            for status in OrderStatus::ALL {
                ui.selectable_value(&mut picked, status, status.label());
            }
        });
    if picked != current {
        on_change(picked);
    }
}
