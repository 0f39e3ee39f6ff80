// src/gui/components/search_bar.rs
//
// Query text box, disambiguation combo box and the informational line
// ("Please enter a player name.", "No player found with that name.").

use eframe::egui::{self, RichText};

use crate::{config::consts::APP_TITLE, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.heading(APP_TITLE);

    let mut text = app.state.gui.query.clone();
    let edited = ui
        .horizontal(|ui| {
            ui.label(RichText::new("Enter player name:").size(16.0));
            ui.add(
                egui::TextEdit::singleline(&mut text)
                    .desired_width(360.0)
                    .hint_text("e.g. John Smith"),
            )
            .changed()
        })
        .inner;
    if edited {
        app.set_query(text);
    }

    // Disambiguation: only while several distinct names match.
    if let Some(choices) = app.outcome.choices().map(|c| c.to_vec()) {
        let current = app.state.gui.chosen_name.clone();
        let mut picked = current.clone();

        ui.horizontal(|ui| {
            ui.label(RichText::new("Select a player:").size(16.0));
            egui::ComboBox::from_id_salt("player_choice")
                .selected_text(picked.as_deref().unwrap_or("Choose…"))
                .width(360.0)
                .show_ui(ui, |ui| {
                    for name in &choices {
                        ui.selectable_value(&mut picked, Some(name.clone()), name.as_str());
                    }
                });
        });

        if picked != current {
            if let Some(name) = picked {
                app.choose(name);
            }
        }
    }

    if let Some(msg) = app.outcome.message() {
        ui.label(RichText::new(msg).italics());
    }
    ui.add_space(4.0);
}
