use crate::theme::*;
use crate::utils::cmd_button;
use eframe::egui;
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub struct HeaderResponse {
    pub refresh_clicked: bool,
    pub sign_in_clicked: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    page_title: &str,
    is_busy: bool,
    version: &str,
    signed_in_as: Option<&str>,
) -> HeaderResponse {
    let mut resp = HeaderResponse {
        refresh_clicked: false,
        sign_in_clicked: false,
    };
    let version_text = format!("v{version}");

    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(6.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_BG)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("BAZAAR")
                        .family(egui::FontFamily::Monospace)
                        .size(12.0)
                        .extra_letter_spacing(2.0)
                        .strong()
                        .color(COL_ACCENT),
                );
                tui.label(
                    egui::RichText::new(version_text)
                        .family(egui::FontFamily::Monospace)
                        .size(10.0)
                        .color(COL_TEXT_DIM),
                );
                tui.label(egui::RichText::new(page_title).size(13.0).color(COL_TEXT));
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if is_busy {
                    tui.ui_add(egui::Spinner::new());
                }
                resp.refresh_clicked |= tui
                    .ui(|ui| cmd_button(ui, "REFRESH", "outline", !is_busy))
                    .clicked();

                match signed_in_as {
                    Some(who) => {
                        tui.label(egui::RichText::new(who).size(11.0).color(COL_TEXT_DIM));
                    }
                    None => {
                        resp.sign_in_clicked |= tui
                            .ui(|ui| cmd_button(ui, "SIGN IN", "primary", true))
                            .clicked();
                    }
                }
            });
        },
    );

    resp
}
