// src/gui/components/status_bar.rs
use eframe::egui::{self, Align, Layout};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        ui.label(app.status.as_str());
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let players = app.engine.players();
            let football = app
                .engine
                .football()
                .map(|f| format!(" | {} football row(s)", f.len()))
                .unwrap_or_default();
            ui.weak(format!("{} player(s){}", players.len(), football));
        });
    });
}
