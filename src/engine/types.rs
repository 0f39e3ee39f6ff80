// src/engine/types.rs
use std::collections::BTreeMap;

use crate::data::RowSet;

/// One grouping criterion used to surface related records.
/// Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConnectionKind {
    CollegeAgeBand,
    Nationality,
    College,
    HighSchool,
    TeamLeague,
    TeamLocation,
}

impl ConnectionKind {
    /// Stable snake_case key
    pub fn key(&self) -> &'static str {
        match self {
            ConnectionKind::CollegeAgeBand => "college_age_band",
            ConnectionKind::Nationality    => "nationality",
            ConnectionKind::College        => "college",
            ConnectionKind::HighSchool     => "high_school",
            ConnectionKind::TeamLeague     => "team_league",
            ConnectionKind::TeamLocation   => "team_location",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ConnectionKind::CollegeAgeBand => "College with Age Range (±1 year)",
            ConnectionKind::Nationality    => "Nationality",
            ConnectionKind::College        => "College",
            ConnectionKind::HighSchool     => "High School",
            ConnectionKind::TeamLeague     => "Team",
            ConnectionKind::TeamLocation   => "Team Location",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionTable {
    pub kind: ConnectionKind,
    /// e.g. "College: State U", "Team: Hawks in NBL"
    pub heading: String,
    pub rows: RowSet,
}

/// Category → related rows. Categories whose driving field is absent on
/// the subject record are simply not present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Connections {
    tables: BTreeMap<ConnectionKind, ConnectionTable>,
}

impl Connections {
    pub(crate) fn insert(&mut self, table: ConnectionTable) {
        self.tables.insert(table.kind, table);
    }

    pub fn get(&self, kind: ConnectionKind) -> Option<&ConnectionTable> {
        self.tables.get(&kind)
    }

    pub fn contains(&self, kind: ConnectionKind) -> bool {
        self.tables.contains_key(&kind)
    }

    /// Tables in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ConnectionTable> {
        self.tables.values()
    }

    pub fn kinds(&self) -> Vec<ConnectionKind> {
        self.tables.keys().copied().collect()
    }

    pub fn len(&self) -> usize { self.tables.len() }
    pub fn is_empty(&self) -> bool { self.tables.is_empty() }
}

/// Per-teammate count of distinct seasons on the same team.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeammateAggregate {
    pub name: String,
    pub seasons_played_together: usize,
    pub team: String,
}

/// A resolved query: the subject record plus everything derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Lookup {
    /// Row index of the subject record in the player store
    pub record: usize,
    /// All rows the query text matched
    pub matches: RowSet,
    /// Present when several distinct names matched and one was chosen
    pub choices: Option<Vec<String>>,
    pub connections: Connections,
    /// Present only when a football dataset is configured
    pub teammates: Option<Vec<TeammateAggregate>>,
}

/// Response to one submitted query.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryOutcome {
    /// No query text yet
    Prompt,
    NotFound,
    /// Several distinct names matched; the caller must pick one
    Ambiguous { matches: RowSet, choices: Vec<String> },
    Found(Lookup),
}

impl QueryOutcome {
    /// User-facing line for the informational states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            QueryOutcome::Prompt => Some("Please enter a player name."),
            QueryOutcome::NotFound => Some("No player found with that name."),
            QueryOutcome::Ambiguous { .. } => Some("Multiple players found. Please select the player:"),
            QueryOutcome::Found(_) => None,
        }
    }

    /// Disambiguation choices, whether or not one has been picked yet.
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            QueryOutcome::Ambiguous { choices, .. } => Some(choices),
            QueryOutcome::Found(l) => l.choices.as_deref(),
            _ => None,
        }
    }

    pub fn lookup(&self) -> Option<&Lookup> {
        match self {
            QueryOutcome::Found(l) => Some(l),
            _ => None,
        }
    }
}
