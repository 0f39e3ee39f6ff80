// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use player_connections::{
    cli::{self, Mode},
    config::{consts::APP_TITLE, state::AppState},
    engine::QueryEngine,
    gui,
    loge,
};

fn main() {
    let opts = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Mode::Run(opts)) => opts,
        Ok(Mode::Help) => {
            eprintln!("{}", cli::HELP);
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    // Datasets load once, before any window exists.
    let engine = match QueryEngine::open(&opts.data) {
        Ok(engine) => engine,
        Err(e) => {
            loge!("Startup: {e}");
            eprintln!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(opts);
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state, engine) {
        loge!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
