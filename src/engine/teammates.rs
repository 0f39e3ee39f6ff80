// src/engine/teammates.rs
//
// Teammate overlap over the football dataset:
// 1. collect every (team, season) the player appears in,
// 2. join the whole dataset on (team, season), skipping the player's own rows,
// 3. group by teammate name and count distinct seasons.

use std::collections::{HashMap, HashSet};

use crate::store::FootballStore;

use super::types::TeammateAggregate;

struct Overlap<'a> {
    seasons: HashSet<&'a str>,
    // team of the first shared row, in file order
    team: &'a str,
}

/// `key` is a normalized name. Sorted by seasons together (descending),
/// ties by teammate name (ascending).
pub fn aggregate(store: &FootballStore, key: &str) -> Vec<TeammateAggregate> {
    if key.is_empty() {
        return Vec::new();
    }

    let stints: HashSet<(&str, &str)> = store
        .records()
        .iter()
        .filter(|r| r.normalized_name == key)
        .filter_map(|r| Some((r.team.as_deref()?, r.season.as_deref()?)))
        .collect();

    if stints.is_empty() {
        logd!("Teammates: no (team, season) rows for {:?}", key);
        return Vec::new();
    }

    let mut by_name: HashMap<&str, Overlap> = HashMap::new();
    for r in store.records() {
        if r.normalized_name == key {
            continue;
        }
        let (Some(name), Some(team), Some(season)) =
            (r.name.as_deref(), r.team.as_deref(), r.season.as_deref())
        else {
            continue;
        };
        if !stints.contains(&(team, season)) {
            continue;
        }
        by_name
            .entry(name)
            .or_insert_with(|| Overlap { seasons: HashSet::new(), team })
            .seasons
            .insert(season);
    }

    let mut out: Vec<TeammateAggregate> = by_name
        .into_iter()
        .map(|(name, o)| TeammateAggregate {
            name: s!(name),
            seasons_played_together: o.seasons.len(),
            team: s!(o.team),
        })
        .collect();

    out.sort_by(|a, b| {
        b.seasons_played_together
            .cmp(&a.seasons_played_together)
            .then_with(|| a.name.cmp(&b.name))
    });

    logd!("Teammates: {:?} → {} teammate(s) over {} stint(s)", key, out.len(), stints.len());
    out
}
