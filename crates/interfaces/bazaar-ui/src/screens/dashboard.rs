use crate::theme::*;
use crate::utils::{cmd_button, pill, section_label};
use bazaar_app_core::app_core::AppCommand;
use bazaar_app_core::viewmodel::{BreakdownVm, DashboardBodyVm, DashboardVm, StatCardVm};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, vm: &DashboardVm, cmds: &mut Vec<AppCommand>) {
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
    .add(|tui| match vm {
        DashboardVm::Idle | DashboardVm::Loading => {
            centered(tui, |tui| {
                tui.ui_add(egui::Spinner::new());
                tui.label(
                    egui::RichText::new("Loading dashboard...")
                        .size(12.0)
                        .color(COL_TEXT_DIM),
                );
            });
        }
        DashboardVm::Failed { message } => {
            centered(tui, |tui| {
                tui.label(
                    egui::RichText::new("Could not load the dashboard")
                        .size(14.0)
                        .strong()
                        .color(COL_DANGER),
                );
                tui.label(egui::RichText::new(message).size(11.0).color(COL_TEXT_DIM));
                if tui
                    .ui(|ui| cmd_button(ui, "RETRY", "primary", true))
                    .clicked()
                {
                    cmds.push(AppCommand::RetryDashboard);
                }
            });
        }
        DashboardVm::Ready(body) => ready(tui, body, cmds),
    });
}

fn centered<'a>(tui: impl TuiBuilderLogic<'a>, f: impl FnOnce(&mut egui_taffy::Tui)) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        gap: length(8.0),
        justify_content: Some(taffy::JustifyContent::Center),
        align_items: Some(taffy::AlignItems::Center),
        ..Default::default()
    })
    .add(f);
}

fn ready(tui: &mut egui_taffy::Tui, body: &DashboardBodyVm, cmds: &mut Vec<AppCommand>) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        gap: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: length(64.0),
        },
        flex_shrink: 0.0,
        ..Default::default()
    })
    .add(|tui| {
        for card in &body.stats {
            stat_card(&mut *tui, card);
        }
    });

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        gap: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        flex_shrink: 0.0,
        ..Default::default()
    })
    .add(|tui| {
        breakdown(&mut *tui, "PRODUCTS BY STATUS", &body.product_breakdown);
        breakdown(&mut *tui, "ORDERS BY STATUS", &body.order_breakdown);
    });

    panel(&mut *tui, "RECENT ORDERS", |ui| {
        if body.recent_orders.is_empty() {
            ui.label(egui::RichText::new("No orders yet").color(COL_TEXT_DIM));
            return;
        }
        egui::Grid::new("recent_orders")
            .num_columns(5)
            .striped(true)
            .spacing(egui::vec2(16.0, 4.0))
            .show(ui, |ui| {
                for h in ["ORDER", "STATUS", "ITEMS", "TOTAL", "DATE"] {
                    section_label(ui, h);
                }
                ui.end_row();
                for row in &body.recent_orders {
                    if ui.link(format!("#{}", row.id)).clicked() {
                        cmds.push(AppCommand::Navigate("/orders".into()));
                        cmds.push(AppCommand::SelectOrder(row.id));
                    }
                    pill(ui, row.status_label, status_color(row.status));
                    ui.label(row.items.to_string());
                    ui.label(egui::RichText::new(&row.total).monospace());
                    ui.label(egui::RichText::new(&row.date).color(COL_TEXT_DIM));
                    ui.end_row();
                }
            });
    });

    panel(&mut *tui, "BEST SELLERS", |ui| {
        if body.best_sellers.is_empty() {
            ui.label(egui::RichText::new("No sales recorded").color(COL_TEXT_DIM));
            return;
        }
        egui::Grid::new("best_sellers")
            .num_columns(2)
            .spacing(egui::vec2(16.0, 4.0))
            .show(ui, |ui| {
                for b in &body.best_sellers {
                    ui.label(&b.name);
                    ui.label(egui::RichText::new(format!("{} sold", b.total_sold)).color(COL_ACCENT));
                    ui.end_row();
                }
            });
    });
}

fn stat_card<'a>(tui: impl TuiBuilderLogic<'a>, card: &StatCardVm) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        flex_basis: length(0.0),
        gap: length(2.0),
        justify_content: Some(taffy::JustifyContent::Center),
        padding: length(8.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.label(
                egui::RichText::new(card.label.to_uppercase())
                    .size(9.0)
                    .color(COL_TEXT_DIM)
                    .strong(),
            );
            tui.label(egui::RichText::new(&card.value).size(16.0).color(COL_TEXT));
            tui.label(
                egui::RichText::new(&card.change)
                    .size(10.0)
                    .color(if card.trending_up { COL_SUCCESS } else { COL_DANGER }),
            );
        },
    );
}

fn breakdown<'a>(tui: impl TuiBuilderLogic<'a>, title: &str, rows: &[BreakdownVm]) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        flex_basis: length(0.0),
        gap: length(4.0),
        padding: length(8.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.ui(|ui| section_label(ui, title));
            let total: u64 = rows.iter().map(|r| r.count).sum();
            tui.ui(|ui| {
                for r in rows {
                    let frac = if total == 0 {
                        0.0
                    } else {
                        r.count as f32 / total as f32
                    };
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&r.label).size(11.0));
                        ui.add(
                            egui::ProgressBar::new(frac)
                                .desired_width(120.0)
                                .text(r.count.to_string()),
                        );
                    });
                }
            });
        },
    );
}

pub(crate) fn panel<'a>(tui: impl TuiBuilderLogic<'a>, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        flex_shrink: 0.0,
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG_DARK)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.ui(|ui| section_label(ui, title));
            tui.ui(body);
        },
    );
}
