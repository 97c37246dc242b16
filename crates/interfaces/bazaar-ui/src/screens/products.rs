use crate::screens::dashboard::panel;
use crate::theme::*;
use crate::utils::section_label;
use bazaar_app_core::viewmodel::ProductRowVm;
use eframe::egui;
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, products: &[ProductRowVm]) {
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
        panel(&mut *tui, "RECENT PRODUCTS", |ui| {
            if products.is_empty() {
                ui.label(egui::RichText::new("No products loaded").color(COL_TEXT_DIM));
                return;
            }
            egui::Grid::new("products_table")
                .num_columns(5)
                .striped(true)
                .spacing(egui::vec2(16.0, 4.0))
                .show(ui, |ui| {
                    for h in ["ID", "NAME", "PRICE", "STOCK", "ADDED"] {
                        section_label(ui, h);
                    }
                    ui.end_row();
                    for p in products {
                        ui.label(egui::RichText::new(p.id.to_string()).color(COL_TEXT_DIM));
                        ui.label(&p.name);
                        ui.label(egui::RichText::new(&p.price).monospace());
                        let stock_col = if p.stock == 0 { COL_DANGER } else { COL_TEXT };
                        ui.label(egui::RichText::new(p.stock.to_string()).color(stock_col));
                        ui.label(egui::RichText::new(&p.date).color(COL_TEXT_DIM));
                        ui.end_row();
                    }
                });
        });
    });
}
