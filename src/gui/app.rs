// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    engine::{QueryEngine, QueryOutcome},
};

pub fn run(
    options: eframe::NativeOptions,
    state: AppState,
    engine: QueryEngine,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, engine)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // read-only datasets + query layer
    pub engine: QueryEngine,

    // result of the last submitted query
    pub outcome: QueryOutcome,

    // bottom status line
    pub status: String,
}

impl App {
    pub fn new(state: AppState, engine: QueryEngine) -> Self {
        logf!(
            "Init: players={}, football={:?}",
            engine.players().len(),
            engine.football().map(|f| f.len())
        );

        let status = format!(
            "Loaded {} player(s) from {}",
            engine.players().len(),
            engine.players().origin().display()
        );

        let mut app = Self {
            state,
            engine,
            outcome: QueryOutcome::Prompt,
            status,
        };
        // Query text may be pre-filled
        app.refresh();
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Re-run the current query text + chosen name through the engine.
    pub fn refresh(&mut self) {
        let gui = &self.state.gui;
        self.outcome = self.engine.submit_query(&gui.query, gui.chosen_name.as_deref());

        // A stale choice from a previous query is dropped once it no longer applies.
        if matches!(self.outcome, QueryOutcome::Ambiguous { .. } | QueryOutcome::NotFound | QueryOutcome::Prompt) {
            self.state.gui.chosen_name = None;
        }

        let msg = match &self.outcome {
            QueryOutcome::Found(l) => format!(
                "{} match(es), {} connection table(s)",
                l.matches.len(),
                l.connections.len()
            ),
            other => s!(other.message().unwrap_or_default()),
        };
        self.status(msg);
    }

    /// Query text edited: any earlier choice belongs to the old text.
    pub fn set_query(&mut self, text: String) {
        self.state.gui.query = text;
        self.state.gui.chosen_name = None;
        self.refresh();
    }

    pub fn choose(&mut self, name: String) {
        logf!("UI: Chose {:?} for query {:?}", name, self.state.gui.query);
        self.state.gui.chosen_name = Some(name);
        self.refresh();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("query").show(ctx, |ui| {
            crate::gui::components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            crate::gui::components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("results_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    crate::gui::components::player_card::draw(ui, self);
                    ui.separator();
                    crate::gui::components::connections::draw(ui, self);
                });
        });
    }
}
