mod backend_bridge;
mod config;
mod controller;
mod host;
mod ui;

use std::sync::Arc;

use clap::Parser;
use crossbeam_channel::bounded;
use page_core::{PageController, PageHost};
use shared::content::ResumeContent;
use storage::{MemoryPreferences, PreferenceFile, PreferenceStore, ProfilePaths};
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{Args, StartupConfig};
use crate::controller::events::UiEvent;
use crate::host::{EguiStyleScope, ScreenshotPrintHost, SystemClipboard};
use crate::ui::PortfolioApp;

const APP_TITLE: &str = "Ezra Tawachi · Portafolio";

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter '{filter}': {err}; falling back to info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn open_preferences(startup: &StartupConfig) -> Box<dyn PreferenceStore> {
    let opened = ProfilePaths::resolve(startup.data_dir.as_deref()).and_then(|paths| {
        paths.ensure_data_root()?;
        Ok(PreferenceFile::open(&paths))
    });
    match opened {
        Ok(file) => {
            tracing::info!(path = %file.path().display(), "using preference file");
            Box::new(file)
        }
        Err(err) => {
            tracing::warn!("preference file unavailable, keeping theme in memory: {err:#}");
            Box::new(MemoryPreferences::new())
        }
    }
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let (startup, warnings) = config::load_settings(&args);
    init_tracing(&startup.log_filter);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(page_url = %startup.page_url, "starting portfolio viewer");

    let store = open_preferences(&startup);
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let host = PageHost {
                store,
                style: Box::new(EguiStyleScope::new(cc.egui_ctx.clone())),
                clipboard: Arc::new(SystemClipboard::new()),
                printer: Arc::new(ScreenshotPrintHost::new(cc.egui_ctx.clone())),
            };
            let page = PageController::new(host, startup.page_url);
            backend_bridge::runtime::launch(
                cmd_rx,
                ui_tx,
                page.clipboard_service(),
                cc.egui_ctx.clone(),
            );
            Ok(Box::new(PortfolioApp::new(
                page,
                ResumeContent::builtin(),
                cmd_tx,
                ui_rx,
            )))
        }),
    )
}
