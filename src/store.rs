// src/store.rs
//! Read-only record stores, loaded once at startup and shared via `Arc`.
//!
//! Two shapes exist:
//! - `RecordStore`: the main athlete dataset (`FullName`, ..., `Age`).
//! - `FootballStore`: the optional football roster dataset (`name`, `team`, `season`).
//!
//! Both drop rows where every field is absent and derive a normalized name
//! key per row (see `core::sanitize::normalize_name`).

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::consts::{FOOTBALL_COLUMNS, PLAYER_COLUMNS};
use crate::core::sanitize::{clean_field, fmt_age, normalize_opt, parse_age};
use crate::error::{DataUnavailable, LoadCause};

/* ---------------- Records ---------------- */

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerRecord {
    pub full_name: Option<String>,
    pub nationality: Option<String>,
    pub college: Option<String>,
    pub high_school: Option<String>,
    pub team: Option<String>,
    pub team_location: Option<String>,
    pub league: Option<String>,
    pub age: Option<f64>,
    /// Derived from `full_name`; empty when the name is missing.
    pub normalized_name: String,
}

impl PlayerRecord {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }

    /// Cells in `PLAYER_COLUMNS` order; absent values render as empty cells.
    pub fn cells(&self) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        vec![
            opt(&self.full_name),
            opt(&self.nationality),
            opt(&self.college),
            opt(&self.high_school),
            opt(&self.team),
            opt(&self.team_location),
            opt(&self.league),
            self.age.map(fmt_age).unwrap_or_default(),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FootballRecord {
    pub name: Option<String>,
    pub team: Option<String>,
    pub season: Option<String>,
    pub normalized_name: String,
}

/* ---------------- Raw CSV rows (private) ---------------- */

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPlayer {
    FullName: Option<String>,
    Nationality: Option<String>,
    College: Option<String>,
    HighSchool: Option<String>,
    Team: Option<String>,
    Team_Location: Option<String>,
    League: Option<String>,
    Age: Option<String>,
}

impl RawPlayer {
    fn into_record(self, line: u64) -> Option<PlayerRecord> {
        let age_raw = clean_field(self.Age);
        let age = parse_age(age_raw.as_deref());
        if age.is_none() {
            if let Some(bad) = &age_raw {
                logd!("Store: line {line}: non-numeric Age {bad:?}, treating as absent");
            }
        }

        let rec = PlayerRecord {
            full_name: clean_field(self.FullName),
            nationality: clean_field(self.Nationality),
            college: clean_field(self.College),
            high_school: clean_field(self.HighSchool),
            team: clean_field(self.Team),
            team_location: clean_field(self.Team_Location),
            league: clean_field(self.League),
            age,
            normalized_name: s!(),
        };

        let all_absent = age_raw.is_none()
            && rec.full_name.is_none()
            && rec.nationality.is_none()
            && rec.college.is_none()
            && rec.high_school.is_none()
            && rec.team.is_none()
            && rec.team_location.is_none()
            && rec.league.is_none();
        if all_absent {
            return None;
        }

        let normalized_name = normalize_opt(rec.full_name.as_deref());
        Some(PlayerRecord { normalized_name, ..rec })
    }
}

#[derive(Debug, Deserialize)]
struct RawFootball {
    name: Option<String>,
    team: Option<String>,
    season: Option<String>,
}

impl RawFootball {
    fn into_record(self, _line: u64) -> Option<FootballRecord> {
        let name = clean_field(self.name);
        let team = clean_field(self.team);
        let season = clean_field(self.season);
        if name.is_none() && team.is_none() && season.is_none() {
            return None;
        }
        let normalized_name = normalize_opt(name.as_deref());
        Some(FootballRecord { name, team, season, normalized_name })
    }
}

/* ---------------- Loading ---------------- */

/// Parse every row of `rdr` into `T`, failing on the first malformed row
/// or when any `required` header is missing. Rows mapped to `None` are dropped.
fn read_rows<R, Raw, T>(
    rdr: R,
    origin: &Path,
    required: &[&'static str],
    convert: impl Fn(Raw, u64) -> Option<T>,
) -> Result<Vec<T>, DataUnavailable>
where
    R: Read,
    Raw: DeserializeOwned,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|e| DataUnavailable::new(origin, e))?
        .clone();
    for col in required {
        if !headers.iter().any(|h| h == *col) {
            return Err(DataUnavailable::new(origin, LoadCause::MissingColumn(*col)));
        }
    }

    let mut out = Vec::new();
    let mut dropped = 0usize;
    for result in reader.deserialize::<Raw>() {
        let raw = result.map_err(|e| DataUnavailable::new(origin, e))?;
        // Header is line 1
        let line = out.len() as u64 + dropped as u64 + 2;
        match convert(raw, line) {
            Some(rec) => out.push(rec),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        logd!("Store: {}: dropped {} empty row(s)", origin.display(), dropped);
    }
    Ok(out)
}

fn open(path: &Path) -> Result<File, DataUnavailable> {
    File::open(path).map_err(|e| DataUnavailable::new(path, e))
}

/// The main athlete dataset.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    origin: PathBuf,
    records: Vec<PlayerRecord>,
}

impl RecordStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataUnavailable> {
        let path = path.as_ref();
        let store = Self::from_reader(open(path)?, path)?;
        logf!("Store: Loaded players from {} (rows={})", path.display(), store.len());
        Ok(store)
    }

    /// Load from any reader; `origin` only labels errors and logs.
    pub fn from_reader<R: Read>(rdr: R, origin: impl Into<PathBuf>) -> Result<Self, DataUnavailable> {
        let origin = origin.into();
        let records = read_rows(rdr, &origin, &PLAYER_COLUMNS, RawPlayer::into_record)?;
        Ok(Self { origin, records })
    }

    /// Build directly from records (normalized keys are recomputed).
    pub fn from_records(records: Vec<PlayerRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| PlayerRecord { normalized_name: normalize_opt(r.full_name.as_deref()), ..r })
            .collect();
        Self { origin: PathBuf::from("<memory>"), records }
    }

    pub fn origin(&self) -> &Path { &self.origin }
    pub fn records(&self) -> &[PlayerRecord] { &self.records }
    pub fn get(&self, ix: usize) -> Option<&PlayerRecord> { self.records.get(ix) }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

/// The auxiliary football dataset used for teammate overlap.
#[derive(Clone, Debug, Default)]
pub struct FootballStore {
    origin: PathBuf,
    records: Vec<FootballRecord>,
}

impl FootballStore {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataUnavailable> {
        let path = path.as_ref();
        let store = Self::from_reader(open(path)?, path)?;
        logf!("Store: Loaded football rows from {} (rows={})", path.display(), store.len());
        Ok(store)
    }

    pub fn from_reader<R: Read>(rdr: R, origin: impl Into<PathBuf>) -> Result<Self, DataUnavailable> {
        let origin = origin.into();
        let records = read_rows(rdr, &origin, &FOOTBALL_COLUMNS, RawFootball::into_record)?;
        Ok(Self { origin, records })
    }

    pub fn origin(&self) -> &Path { &self.origin }
    pub fn records(&self) -> &[FootballRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}
