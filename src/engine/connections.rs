// src/engine/connections.rs
//
// Equality filters over the player store. Matching is exact on the trimmed
// field value; nothing here is normalized.

use crate::config::consts::AGE_BAND;
use crate::data::RowSet;
use crate::store::{PlayerRecord, RecordStore};

use super::types::{ConnectionKind::*, ConnectionTable, Connections};

/// Rows whose `field` equals `value`.
fn same(
    rows: &[PlayerRecord],
    field: impl Fn(&PlayerRecord) -> Option<&str>,
    value: &str,
) -> RowSet {
    RowSet::from_predicate(rows, |r| field(r) == Some(value))
}

pub fn collect(store: &RecordStore, subject: &PlayerRecord) -> Connections {
    let rows = store.records();
    let mut out = Connections::default();

    if let (Some(college), Some(age)) = (subject.college.as_deref(), subject.age) {
        let (lo, hi) = (age - AGE_BAND, age + AGE_BAND);
        let rows = RowSet::from_predicate(rows, |r| {
            r.college.as_deref() == Some(college)
                && r.age.is_some_and(|a| a >= lo && a <= hi)
        });
        out.insert(ConnectionTable {
            kind: CollegeAgeBand,
            heading: format!("{}: {}", CollegeAgeBand.title(), college),
            rows,
        });
    }

    if let Some(nationality) = subject.nationality.as_deref() {
        out.insert(ConnectionTable {
            kind: Nationality,
            heading: format!("{}: {}", Nationality.title(), nationality),
            rows: same(rows, |r| r.nationality.as_deref(), nationality),
        });
    }

    if let Some(college) = subject.college.as_deref() {
        out.insert(ConnectionTable {
            kind: College,
            heading: format!("{}: {}", College.title(), college),
            rows: same(rows, |r| r.college.as_deref(), college),
        });
    }

    if let Some(high_school) = subject.high_school.as_deref() {
        out.insert(ConnectionTable {
            kind: HighSchool,
            heading: format!("{}: {}", HighSchool.title(), high_school),
            rows: same(rows, |r| r.high_school.as_deref(), high_school),
        });
    }

    if let (Some(team), Some(league)) = (subject.team.as_deref(), subject.league.as_deref()) {
        let rows = RowSet::from_predicate(rows, |r| {
            r.team.as_deref() == Some(team) && r.league.as_deref() == Some(league)
        });
        out.insert(ConnectionTable {
            kind: TeamLeague,
            heading: format!("{}: {} in {}", TeamLeague.title(), team, league),
            rows,
        });
    }

    if let Some(location) = subject.team_location.as_deref() {
        out.insert(ConnectionTable {
            kind: TeamLocation,
            heading: format!("{}: {}", TeamLocation.title(), location),
            rows: same(rows, |r| r.team_location.as_deref(), location),
        });
    }

    logd!(
        "Connections: {:?} → {:?}",
        subject.display_name(),
        out.iter().map(|t| (t.kind.key(), t.rows.len())).collect::<Vec<_>>()
    );
    out
}
