// src/table.rs
//! TableData: owned headers + rows for one rendered result table.
//!
//! Built at the UI boundary from a `RowSet` (connections) or teammate
//! aggregates, then either drawn by the GUI, printed by the CLI, or
//! stringified for the clipboard.

use std::io;

use crate::config::consts::{PLAYER_COLUMNS, TEAMMATE_COLUMNS};
use crate::data::RowSet;
use crate::engine::TeammateAggregate;
use crate::store::RecordStore;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn with(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Player rows in store order with the dataset's column headers.
    pub fn from_records(store: &RecordStore, rows: &RowSet) -> Self {
        Self::with(
            Some(PLAYER_COLUMNS.iter().map(|h| s!(*h)).collect()),
            rows.records(store).map(|r| r.cells()).collect(),
        )
    }

    pub fn from_teammates(mates: &[TeammateAggregate]) -> Self {
        Self::with(
            Some(TEAMMATE_COLUMNS.iter().map(|h| s!(*h)).collect()),
            mates
                .iter()
                .map(|m| cells![m.name.as_str(), m.seasons_played_together.to_string(), m.team.as_str()])
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Delimited text (CSV/TSV), for the clipboard. Fields are quoted
    /// only when they contain the separator, a quote or a line break.
    pub fn to_delimited(&self, sep: char, include_headers: bool) -> Result<String, csv::Error> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(sep as u8)
            .flexible(true)
            .from_writer(Vec::new());

        if include_headers {
            if let Some(h) = &self.headers {
                wtr.write_record(h)?;
            }
        }
        for r in &self.rows {
            wtr.write_record(r)?;
        }

        let buf = wtr
            .into_inner()
            .map_err(|e| csv::Error::from(io::Error::new(e.error().kind(), e.to_string())))?;
        Ok(match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        })
    }

    /// Space-aligned plain text, one line per row, for terminals.
    pub fn to_aligned_text(&self) -> String {
        let ncols = self.ncols();
        let mut widths = vec![0usize; ncols];
        let all = self.headers.iter().chain(self.rows.iter());
        for row in all.clone() {
            for (ci, cell) in row.iter().enumerate().take(ncols) {
                widths[ci] = widths[ci].max(cell.chars().count());
            }
        }

        let mut out = s!();
        for (ri, row) in all.enumerate() {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .take(ncols)
                .map(|(ci, cell)| format!("{:<w$}", cell, w = widths[ci]))
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
            if ri == 0 && self.headers.is_some() {
                let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
                out.push_str(&rule.join("  "));
                out.push('\n');
            }
        }
        out
    }
}
