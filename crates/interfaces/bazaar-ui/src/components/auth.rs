use bazaar_app_core::app_core::AppCommand;
use bazaar_app_core::session::{AuthOverlay, AuthStep};
use eframe::egui;

use crate::theme::*;
use crate::utils::cmd_button;

/// Field values typed into the overlay. Kept by the UI only; credentials are
/// never handed to the stores.
#[derive(Default)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub code: String,
}

pub fn show(ctx: &egui::Context, overlay: &AuthOverlay, form: &mut AuthForm) -> Option<AppCommand> {
    if !overlay.is_open() {
        return None;
    }

    let step = overlay.step();
    let mut cmd = None;
    let mut open = true;

    egui::Window::new(step.title())
        .id(egui::Id::new("auth_overlay"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_width(280.0);
            match step {
                AuthStep::Login => {
                    field(ui, "Email", &mut form.email, false);
                    field(ui, "Password", &mut form.password, true);
                    if cmd_button(ui, "SIGN IN", "primary", !form.email.is_empty()).clicked() {
                        tracing::info!("sign-in requested for {}", form.email);
                        cmd = Some(AppCommand::CloseAuth);
                    }
                    ui.horizontal(|ui| {
                        if ui.link("Create account").clicked() {
                            cmd = Some(AppCommand::SetAuthStep(AuthStep::Register));
                        }
                        if ui.link("Forgot password?").clicked() {
                            cmd = Some(AppCommand::SetAuthStep(AuthStep::ForgotPassword));
                        }
                    });
                }
                AuthStep::Register => {
                    field(ui, "Name", &mut form.name, false);
                    field(ui, "Email", &mut form.email, false);
                    field(ui, "Password", &mut form.password, true);
                    if cmd_button(ui, "REGISTER", "primary", !form.email.is_empty()).clicked() {
                        cmd = Some(AppCommand::SetAuthStep(AuthStep::Login));
                    }
                    if ui.link("Back to sign in").clicked() {
                        cmd = Some(AppCommand::SetAuthStep(AuthStep::Login));
                    }
                }
                AuthStep::ForgotPassword => {
                    field(ui, "Email", &mut form.email, false);
                    if cmd_button(ui, "SEND CODE", "primary", !form.email.is_empty()).clicked() {
                        cmd = Some(AppCommand::SetAuthStep(AuthStep::ResetPassword));
                    }
                    if ui.link("Back to sign in").clicked() {
                        cmd = Some(AppCommand::SetAuthStep(AuthStep::Login));
                    }
                }
                AuthStep::ResetPassword => {
                    field(ui, "Code", &mut form.code, false);
                    field(ui, "New password", &mut form.password, true);
                    if cmd_button(ui, "RESET", "primary", !form.code.is_empty()).clicked() {
                        cmd = Some(AppCommand::SetAuthStep(AuthStep::Login));
                    }
                }
            }
        });

    if !open {
        *form = AuthForm::default();
        return Some(AppCommand::CloseAuth);
    }
    if matches!(cmd, Some(AppCommand::CloseAuth)) {
        *form = AuthForm::default();
    }
    cmd
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String, password: bool) {
    ui.label(egui::RichText::new(label).size(11.0).color(COL_TEXT_DIM));
    ui.add(
        egui::TextEdit::singleline(value)
            .password(password)
            .desired_width(f32::INFINITY),
    );
}
