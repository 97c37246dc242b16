use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::components::auth::AuthForm;
use crate::components::{alerts, auth, header, sidebar};
use crate::screens::{dashboard, orders, placeholder, products};
use eframe::egui;
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

use bazaar_app_core::{viewmodel, AdminApplication, AppCommand, AuthStep};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct BazaarUiApp {
    core: AdminApplication,
    app_version: String,
    search_query: String,
    expanded: HashSet<&'static str>,
    auth_form: AuthForm,
}

impl BazaarUiApp {
    pub fn new(mut core: AdminApplication) -> Self {
        if let Err(e) = core.dispatch(AppCommand::RefreshDashboard) {
            tracing::error!("Failed to start dashboard fetch: {e}");
        }
        Self {
            core,
            app_version: env!("CARGO_PKG_VERSION").to_owned(),
            search_query: String::new(),
            expanded: HashSet::new(),
            auth_form: AuthForm::default(),
        }
    }

    fn run_commands(&mut self, cmds: Vec<AppCommand>) {
        for cmd in cmds {
            if let Err(e) = self.core.dispatch(cmd) {
                tracing::error!("Command rejected: {e}");
            }
        }
    }
}

impl eframe::App for BazaarUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.core.tick(now);

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.style_mut(|style| {
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let state = self.core.state();
        let route = self
            .core
            .routes
            .find_by_path(state.route)
            .or_else(|| self.core.routes.find_by_path(bazaar_app_core::HOME_PATH));
        let dashboard_vm = viewmodel::dashboard_vm(&state);
        let nav_vm = viewmodel::nav_vm(&self.core.routes, &self.search_query, state.route);

        let (orders_vm, alert_vms, signed_in_as, auth_overlay) = match self.core.view() {
            Ok(stores) => (
                Some(viewmodel::orders_vm(&stores.orders)),
                viewmodel::alert_vms(&stores.alerts),
                stores.auth.current_user().map(|u| u.email.clone()),
                Some(stores.auth.clone()),
            ),
            Err(e) => {
                tracing::error!("{e}");
                (None, Vec::new(), None, None)
            }
        };

        let mut cmds: Vec<AppCommand> = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(32.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| {
                        let resp = header::draw(
                            tui,
                            route.map(|r| r.title).unwrap_or_default(),
                            state.dashboard.is_loading(),
                            &self.app_version,
                            signed_in_as.as_deref(),
                        );
                        if resp.refresh_clicked {
                            cmds.push(AppCommand::RefreshDashboard);
                        }
                        if resp.sign_in_clicked {
                            cmds.push(AppCommand::OpenAuth(AuthStep::Login));
                        }
                    });

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Row,
                        size: taffy::Size {
                            width: percent(1.),
                            height: auto(),
                        },
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Hidden,
                        },
                        ..Default::default()
                    })
                    .add(|tui| {
                        tui.style(taffy::Style {
                            size: taffy::Size {
                                width: length(220.0),
                                height: percent(1.),
                            },
                            flex_shrink: 0.0,
                            min_size: taffy::Size {
                                width: length(220.0),
                                height: length(0.0),
                            },
                            ..Default::default()
                        })
                        .add(|tui| {
                            let resp = sidebar::draw(
                                tui,
                                &nav_vm,
                                &mut self.search_query,
                                &mut self.expanded,
                            );
                            if let Some(path) = resp.navigate_to {
                                cmds.push(AppCommand::Navigate(path.to_owned()));
                            }
                        });

                        tui.style(taffy::Style {
                            flex_direction: taffy::FlexDirection::Column,
                            flex_grow: 1.0,
                            size: percent(1.),
                            flex_basis: length(0.0),
                            min_size: taffy::Size {
                                width: length(0.0),
                                height: length(0.0),
                            },
                            overflow: taffy::Point {
                                x: taffy::Overflow::Hidden,
                                y: taffy::Overflow::Hidden,
                            },
                            padding: length(12.0),
                            gap: length(8.0),
                            ..Default::default()
                        })
                        .add(|tui| match route {
                            Some(r) if matches!(r.path, "/dashboard" | "/analytics") => {
                                dashboard::draw(tui, &dashboard_vm, &mut cmds);
                            }
                            Some(r) if r.path.starts_with("/orders") => match &orders_vm {
                                Some(vm) => orders::draw(tui, vm, &mut cmds),
                                None => {
                                    tui.label("Orders unavailable");
                                }
                            },
                            Some(r) if matches!(r.path, "/products" | "/products/list") => {
                                let recent: &[viewmodel::ProductRowVm] = match &dashboard_vm {
                                    viewmodel::DashboardVm::Ready(body) => &body.recent_products,
                                    _ => &[],
                                };
                                products::draw(tui, recent);
                            }
                            Some(r) => placeholder::draw(tui, r),
                            None => {
                                tui.label("Page not found");
                            }
                        });
                    });
                });
        });

        for id in alerts::show(ctx, &alert_vms) {
            cmds.push(AppCommand::DismissAlert(id));
        }
        if let Some(overlay) = &auth_overlay {
            if let Some(cmd) = auth::show(ctx, overlay, &mut self.auth_form) {
                cmds.push(cmd);
            }
        }

        let had_commands = !cmds.is_empty();
        self.run_commands(cmds);

        if had_commands || self.core.state().dashboard.is_loading() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
        if let Some(deadline) = self.core.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
