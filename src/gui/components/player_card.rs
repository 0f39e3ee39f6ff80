// src/gui/components/player_card.rs
use eframe::egui::{self, RichText};

use crate::{core::sanitize::fmt_age, gui::app::App, store::PlayerRecord};

const CARD_TEXT: f32 = 20.0;

fn fields(p: &PlayerRecord) -> [(&'static str, String); 8] {
    let na = |v: &Option<String>| v.clone().unwrap_or_else(|| s!("n/a"));
    [
        ("Full Name", na(&p.full_name)),
        ("Nationality", na(&p.nationality)),
        ("College", na(&p.college)),
        ("High School", na(&p.high_school)),
        ("Team", na(&p.team)),
        ("Team Location", na(&p.team_location)),
        ("League", na(&p.league)),
        ("Age", p.age.map(fmt_age).unwrap_or_else(|| s!("n/a"))),
    ]
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let Some(lookup) = app.outcome.lookup() else { return };
    let Some(player) = app.engine.players().get(lookup.record) else { return };

    ui.label(RichText::new("Player Information:").size(CARD_TEXT));
    ui.horizontal_wrapped(|ui| {
        for (label, value) in fields(player) {
            ui.label(RichText::new(format!("{label}:")).size(CARD_TEXT));
            ui.label(RichText::new(value).size(CARD_TEXT).strong());
            ui.add_space(24.0);
        }
    });
}
