// src/gui/components/data_table.rs
//
// Draws one result table. Purely a view: rows are produced lazily by
// `row_cells`, so only the visible part of a large table is materialized.

use std::hash::Hash;

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

const MAX_TABLE_H: f32 = 320.0;
const ROW_H: f32 = 20.0;

/// Initial width per column from the header text; wide columns for names.
fn preferred_widths(headers: &[&str]) -> Vec<f32> {
    headers
        .iter()
        .map(|h| match *h {
            "FullName" | "Teammate" => 200.0,
            "College" | "HighSchool" | "Team" | "Team_Location" => 170.0,
            "Age" | "Seasons Together" => 60.0,
            _ => 120.0,
        })
        .collect()
}

fn cell(ui: &mut egui::Ui, numeric: bool, text: RichText) {
    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
    if numeric {
        ui.centered_and_justified(|ui| { ui.label(text); });
    } else {
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
    }
}

/// `numeric`: column indexes drawn centered (ages, counts).
pub fn draw<F>(
    ui: &mut egui::Ui,
    id: impl Hash,
    headers: &[&str],
    numeric: &[usize],
    nrows: usize,
    row_cells: F,
)
where
    F: Fn(usize) -> Vec<String>,
{
    let widths = preferred_widths(headers);
    let ncols = headers.len();

    ui.push_id(id, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .min_scrolled_height(0.0)
            .max_scroll_height(MAX_TABLE_H);
        for (ci, &w) in widths.iter().enumerate() {
            let col = if ci + 1 == ncols {
                Column::remainder().at_least(w)
            } else {
                Column::initial(w).at_least(40.0).clip(true)
            };
            table = table.column(col);
        }

        table
            .header(24.0, |mut header| {
                for (ci, h) in headers.iter().enumerate() {
                    header.col(|ui| cell(ui, numeric.contains(&ci), RichText::new(*h).strong()));
                }
            })
            .body(|body| {
                body.rows(ROW_H, nrows, |mut row| {
                    let cells = row_cells(row.index());
                    for ci in 0..ncols {
                        let text = cells.get(ci).map(String::as_str).unwrap_or("");
                        row.col(|ui| cell(ui, numeric.contains(&ci), RichText::new(text)));
                    }
                });
            });
    });
}
