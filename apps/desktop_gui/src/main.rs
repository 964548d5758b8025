mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::app::AdminConsoleApp;

/// Bedquest admin console: dashboard and order management for the bedding
/// business backend.
#[derive(Debug, Parser)]
#[command(name = "bedquest-admin")]
struct Cli {
    /// Base URL of the bedquest-api service.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let settings = config::load_settings(&cli);
    tracing::info!(api_url = %settings.api_url, "starting admin console");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.api_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bedquest Admin Console")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bedquest Admin Console",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(AdminConsoleApp::new(cmd_tx, ui_rx)))
        }),
    )
}
