mod app;
mod components;
mod screens;
mod theme;
mod utils;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run() -> eframe::Result<()> {
    setup_logging();

    let core = match bazaar_app_core::build_application() {
        Ok(core) => core,
        Err(e) => {
            tracing::error!("Failed to start admin kernel: {e:#}");
            return Err(eframe::Error::AppCreation(e.into()));
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([860.0, 560.0])
            .with_title("BAZAAR // ADMIN"),
        ..Default::default()
    };

    eframe::run_native(
        "Bazaar Admin",
        options,
        Box::new(|cc| {
            theme::setup(&cc.egui_ctx);
            Ok(Box::new(app::BazaarUiApp::new(core)))
        }),
    )
}
