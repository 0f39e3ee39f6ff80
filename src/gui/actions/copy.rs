// src/gui/actions/copy.rs
use eframe::egui;

use crate::{gui::app::App, table::TableData};

/// Put one result table on the clipboard as TSV with headers,
/// so it pastes straight into a spreadsheet.
pub fn copy(app: &mut App, ui_ctx: &egui::Context, heading: &str, data: &TableData) {
    if data.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked {:?}, but the table is empty", heading);
        return;
    }

    let txt = match data.to_delimited('\t', true) {
        Ok(txt) => txt,
        Err(e) => {
            loge!("Copy: {:?} failed: {}", heading, e);
            app.status(format!("Copy failed: {e}"));
            return;
        }
    };
    logf!("Copy: {:?}, rows={}, cols={}", heading, data.nrows(), data.ncols());

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", data.nrows()));
}
