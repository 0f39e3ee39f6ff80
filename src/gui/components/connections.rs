// src/gui/components/connections.rs
//
// "Connections" section: one table per connection category present on the
// subject, plus the teammate table when a football dataset is loaded.
// Drawing only reads `app`; a Copy click is returned and applied afterwards.

use eframe::egui::{self, RichText};

use crate::{
    config::consts::{PLAYER_COLUMNS, TEAMMATE_COLUMNS},
    engine::ConnectionKind,
    gui::{actions, app::App},
    table::TableData,
};

use super::data_table;

const AGE_COL: usize = 7;
const SEASONS_COL: usize = 1;

#[derive(Clone, Copy, Debug)]
enum CopyRequest {
    Connection(ConnectionKind),
    Teammates,
}

fn section_heading(ui: &mut egui::Ui, heading: &str, nrows: usize) -> bool {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(heading).strong().size(18.0));
        ui.weak(format!("({nrows} row(s))"));
        ui.small_button("Copy").clicked()
    })
    .inner
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut request: Option<CopyRequest> = None;

    {
        let Some(lookup) = app.outcome.lookup() else { return };
        let store = app.engine.players();

        egui::CollapsingHeader::new("Connections")
            .default_open(true)
            .show(ui, |ui| {
                if lookup.connections.is_empty() && lookup.teammates.is_none() {
                    ui.label("No connections: the player has no college, nationality, high school, team or location on record.");
                }

                for table in lookup.connections.iter() {
                    if section_heading(ui, &table.heading, table.rows.len()) {
                        request = Some(CopyRequest::Connection(table.kind));
                    }
                    let ix = table.rows.indices();
                    data_table::draw(ui, table.kind.key(), &PLAYER_COLUMNS, &[AGE_COL], ix.len(), |ri| {
                        ix.get(ri)
                            .and_then(|&i| store.get(i))
                            .map(|r| r.cells())
                            .unwrap_or_default()
                    });
                }

                if let Some(mates) = &lookup.teammates {
                    let heading = format!("Teammates (shared team and season): {} player(s)", mates.len());
                    if section_heading(ui, &heading, mates.len()) {
                        request = Some(CopyRequest::Teammates);
                    }
                    if mates.is_empty() {
                        ui.label("No teammates found in the football dataset.");
                    } else {
                        let data = TableData::from_teammates(mates);
                        data_table::draw(ui, "teammates", &TEAMMATE_COLUMNS, &[SEASONS_COL], data.nrows(), |ri| {
                            data.rows.get(ri).cloned().unwrap_or_default()
                        });
                    }
                }
            });
    }

    if let Some(req) = request {
        apply_copy(ui.ctx(), app, req);
    }
}

fn apply_copy(ctx: &egui::Context, app: &mut App, req: CopyRequest) {
    let Some(lookup) = app.outcome.lookup() else { return };
    let (heading, data) = match req {
        CopyRequest::Connection(kind) => {
            let Some(table) = lookup.connections.get(kind) else { return };
            (table.heading.clone(), TableData::from_records(app.engine.players(), &table.rows))
        }
        CopyRequest::Teammates => {
            let mates = lookup.teammates.as_deref().unwrap_or_default();
            (s!("Teammates"), TableData::from_teammates(mates))
        }
    };
    actions::copy(app, ctx, &heading, &data);
}
