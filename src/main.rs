//! Game Map Viewer.
//!
//! Interaktive Karte mit Marker-Filtern, Regionen und Erledigt-Status pro
//! Karte. Startadresse: erstes Argument, z.B. `?map=orium&lng=ru`.

use eframe::egui;
use game_map_viewer::{
    ui, AppController, AppIntent, AppState, DataMode, DataSource, DirectorySource, FileStore,
    HttpSource, ViewerOptions,
};
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Game Map Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Game Map Viewer"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Game Map Viewer",
            native_options,
            Box::new(|_cc| {
                let app = ViewerApp::new()?;
                Ok(Box::new(app))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    input: ui::MapInputState,
}

impl ViewerApp {
    fn new() -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let mut options = ViewerOptions::load_from_file(&config_path);
        if let Some(location) = std::env::args().nth(1) {
            options.initial_location = Some(location);
        }

        let store = FileStore::open(options.resolved_storage_path());
        let source = Self::data_source(&options)?;
        log::info!("Datenquelle: {}", source.describe());

        let mut state = AppState::with_services(options, Box::new(store), source);
        let mut controller = AppController::new();
        if let Err(e) = controller.handle_intent(&mut state, AppIntent::StartupRequested) {
            log::error!("Start fehlgeschlagen: {:#}", e);
        }

        Ok(Self {
            state,
            controller,
            input: ui::MapInputState::new(),
        })
    }

    fn data_source(options: &ViewerOptions) -> anyhow::Result<Arc<dyn DataSource>> {
        Ok(match options.data_mode {
            DataMode::Static => Arc::new(DirectorySource::new(options.data_dir.clone())),
            DataMode::Dynamic => Arc::new(HttpSource::new(
                &options.api_base_url,
                Duration::from_secs(options.http_timeout_secs),
            )?),
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();
        if self.state.is_loading() {
            events.push(AppIntent::LoadPollRequested);
        }
        events.extend(self.collect_ui_events(ctx));

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::ViewportResized { .. } | AppIntent::LoadPollRequested
            )
        });

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_sidebar(ctx, &self.state));
        events.extend(ui::show_marker_popup(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_map_events(ui, &response, &self.state));

                ui::paint_map(&ui.painter_at(rect), rect, &self.state);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
        // Ladeergebnisse kommen ohne Benutzereingabe an
        if self.state.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
