// src/engine/engine.rs
use std::sync::Arc;

use crate::{
    config::options::DataOptions,
    core::sanitize::normalize_name,
    data::RowSet,
    error::DataUnavailable,
    store::{FootballStore, PlayerRecord, RecordStore},
};

use super::{
    connections,
    teammates,
    types::{Connections, Lookup, QueryOutcome, TeammateAggregate},
};

/// Query layer over an immutable player store and an optional football store.
/// Cheap to clone; stores are shared.
#[derive(Clone, Debug)]
pub struct QueryEngine {
    players: Arc<RecordStore>,
    football: Option<Arc<FootballStore>>,
}

impl QueryEngine {
    pub fn new(players: Arc<RecordStore>) -> Self {
        Self { players, football: None }
    }

    pub fn with_football(players: Arc<RecordStore>, football: Arc<FootballStore>) -> Self {
        Self { players, football: Some(football) }
    }

    /// Load the configured datasets. Either file failing is fatal.
    pub fn open(data: &DataOptions) -> Result<Self, DataUnavailable> {
        logf!(
            "Startup: opening {} (football: {})",
            data.players_path.display(),
            if data.has_football() { "yes" } else { "no" }
        );
        let players = Arc::new(RecordStore::load(&data.players_path)?);
        let engine = match &data.football_path {
            Some(p) => Self::with_football(players, Arc::new(FootballStore::load(p)?)),
            None => Self::new(players),
        };
        Ok(engine)
    }

    pub fn players(&self) -> &RecordStore { &self.players }
    pub fn football(&self) -> Option<&FootballStore> { self.football.as_deref() }
    pub fn has_football(&self) -> bool { self.football.is_some() }

    /// Normalized substring match against every record's name key.
    /// A query that normalizes to nothing matches nothing.
    pub fn search(&self, text: &str) -> RowSet {
        let needle = normalize_name(text);
        if needle.is_empty() {
            return RowSet::default();
        }
        RowSet::from_predicate(self.players.records(), |r| r.normalized_name.contains(&needle))
    }

    /// Distinct full names among `rows`, first-seen order.
    pub fn distinct_names(&self, rows: &RowSet) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for r in rows.records(&self.players) {
            if let Some(n) = r.full_name.as_deref() {
                if !names.iter().any(|x| x == n) {
                    names.push(s!(n));
                }
            }
        }
        names
    }

    pub fn connections(&self, record: &PlayerRecord) -> Connections {
        connections::collect(&self.players, record)
    }

    /// Empty when no football dataset is configured.
    pub fn teammates(&self, normalized_name: &str) -> Vec<TeammateAggregate> {
        match &self.football {
            Some(fb) => teammates::aggregate(fb, normalized_name),
            None => Vec::new(),
        }
    }

    /// The whole request/response contract for one query.
    ///
    /// - blank text → `Prompt`
    /// - no match → `NotFound`
    /// - several distinct names and no valid `choice` → `Ambiguous`
    /// - otherwise the first row carrying the selected name is the subject.
    pub fn submit_query(&self, text: &str, choice: Option<&str>) -> QueryOutcome {
        if text.trim().is_empty() {
            return QueryOutcome::Prompt;
        }

        let matches = self.search(text);
        if matches.is_empty() {
            logd!("Query: {:?} → no match", text);
            return QueryOutcome::NotFound;
        }

        let names = self.distinct_names(&matches);
        let (selected, choices) = if names.len() > 1 {
            match choice.filter(|c| names.iter().any(|n| n == c)) {
                Some(c) => (s!(c), Some(names)),
                None => {
                    if let Some(c) = choice {
                        logd!("Query: choice {:?} not among matches for {:?}", c, text);
                    }
                    logd!("Query: {:?} → {} distinct names, awaiting choice", text, names.len());
                    return QueryOutcome::Ambiguous { matches, choices: names };
                }
            }
        } else {
            (names.into_iter().next().unwrap_or_default(), None)
        };

        let Some(record) = matches
            .records(&self.players)
            .zip(matches.indices())
            .find(|(r, _)| r.display_name() == selected)
            .map(|(_, &ix)| ix)
        else {
            return QueryOutcome::NotFound;
        };
        let Some(subject) = self.players.get(record) else {
            return QueryOutcome::NotFound;
        };

        let connections = self.connections(subject);
        let teammates = self
            .has_football()
            .then(|| self.teammates(&subject.normalized_name));

        logd!(
            "Query: {:?} → {:?} (row {}, matches={}, categories={:?}, teammates={:?})",
            text,
            selected,
            record,
            matches.len(),
            connections.kinds(),
            teammates.as_ref().map(|t| t.len())
        );

        QueryOutcome::Found(Lookup { record, matches, choices, connections, teammates })
    }
}
