use std::collections::HashSet;

use crate::theme::*;
use crate::utils::section_label;
use bazaar_app_core::viewmodel::{NavItemVm, NavVm};
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct SidebarResponse {
    pub navigate_to: Option<&'static str>,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    vm: &NavVm,
    query: &mut String,
    expanded: &mut HashSet<&'static str>,
) -> SidebarResponse {
    let mut resp = SidebarResponse { navigate_to: None };

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        size: percent(1.),
        min_size: taffy::Size {
            width: percent(1.),
            height: length(0.0),
        },
        align_items: Some(taffy::AlignItems::Stretch),
        padding: length(8.0),
        gap: length(8.0),
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.ui(|ui| {
                ui.add(
                    egui::TextEdit::singleline(query)
                        .hint_text("Search pages...")
                        .desired_width(f32::INFINITY),
                )
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Column,
                flex_grow: 1.0,
                flex_basis: length(0.0),
                min_size: taffy::Size {
                    width: percent(1.),
                    height: length(0.0),
                },
                overflow: taffy::Point {
                    x: taffy::Overflow::Hidden,
                    y: taffy::Overflow::Scroll,
                },
                gap: length(2.0),
                size: taffy::Size {
                    width: percent(1.),
                    height: auto(),
                },
                ..Default::default()
            })
            .add(|tui| match &vm.results {
                Some(results) => {
                    tui.ui(|ui| section_label(ui, "RESULTS"));
                    if results.is_empty() {
                        tui.label(
                            egui::RichText::new("No matching pages")
                                .size(11.0)
                                .color(COL_TEXT_DIM),
                        );
                    }
                    for item in results {
                        if nav_row(&mut *tui, item, 0.0) {
                            resp.navigate_to = Some(item.path);
                        }
                    }
                }
                None => {
                    tui.ui(|ui| section_label(ui, "MENU"));
                    for item in &vm.items {
                        if nav_row(&mut *tui, item, 0.0) {
                            resp.navigate_to = Some(item.path);
                            if !item.children.is_empty() && !expanded.remove(item.title) {
                                expanded.insert(item.title);
                            }
                        }
                        if item.active || expanded.contains(item.title) {
                            for child in &item.children {
                                if nav_row(&mut *tui, child, 14.0) {
                                    resp.navigate_to = Some(child.path);
                                }
                            }
                        }
                    }
                }
            });
        },
    );

    resp
}

/// One clickable entry. Returns true when clicked.
fn nav_row<'a>(tui: impl TuiBuilderLogic<'a>, item: &NavItemVm, indent: f32) -> bool {
    tui.id(egui_taffy::tid(("nav", item.path)))
        .style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            size: taffy::Size {
                width: percent(1.),
                height: length(26.0),
            },
            padding: taffy::Rect {
                left: length(4.0 + indent),
                right: length(4.0),
                top: length(2.0),
                bottom: length(2.0),
            },
            gap: length(8.0),
            ..Default::default()
        })
        .bg_clickable(
            TuiBackground::new()
                .with_background_color(if item.active {
                    COL_ACCENT.linear_multiply(0.1)
                } else {
                    COL_BG
                })
                .with_border_color(if item.active { COL_ACCENT } else { COL_BG })
                .with_border_width(1.0),
            |tui| {
                tui.label(
                    egui::RichText::new(item.icon)
                        .size(12.0)
                        .color(if item.active { COL_ACCENT } else { COL_TEXT_DIM }),
                );
                tui.label(
                    egui::RichText::new(item.title)
                        .size(12.0)
                        .color(COL_TEXT),
                );
            },
        )
        .clicked()
}
