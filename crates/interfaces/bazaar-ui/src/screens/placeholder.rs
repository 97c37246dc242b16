use crate::theme::*;
use bazaar_core::RouteDescriptor;
use eframe::egui;
use egui_taffy::{taffy, TuiBuilderLogic};

/// Pages that exist in the navigation but have no client-side view yet.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, route: &RouteDescriptor) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        flex_grow: 1.0,
        gap: taffy::prelude::length(6.0),
        justify_content: Some(taffy::JustifyContent::Center),
        align_items: Some(taffy::AlignItems::Center),
        ..Default::default()
    })
    .add(|tui| {
        tui.label(egui::RichText::new(route.icon).size(28.0).color(COL_TEXT_DIM));
        tui.label(
            egui::RichText::new(route.title)
                .size(14.0)
                .strong()
                .color(COL_TEXT),
        );
        tui.label(
            egui::RichText::new(route.description)
                .size(11.0)
                .color(COL_TEXT_DIM),
        );
    });
}
