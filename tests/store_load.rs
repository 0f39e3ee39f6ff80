// tests/store_load.rs
//
// Loading the datasets: header checks, empty-row dropping, trimming,
// derived name keys and the DataUnavailable paths.

use std::fs;
use std::path::PathBuf;

use player_connections::config::options::DataOptions;
use player_connections::engine::QueryEngine;
use player_connections::error::LoadCause;
use player_connections::store::{FootballStore, RecordStore};

const HEADER: &str = "FullName,Nationality,College,HighSchool,Team,Team_Location,League,Age\n";

fn players(body: &str) -> RecordStore {
    let text = format!("{HEADER}{body}");
    RecordStore::from_reader(text.as_bytes(), "players.csv").unwrap()
}

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pc_store_{}_{}", std::process::id(), name));
    p
}

#[test]
fn drops_fully_empty_rows_and_trims() {
    let store = players(
        "John Smith , USA ,State U,,Hawks,Boston,NBL,22\n\
         ,,,,,,,\n\
         \" \",,,,,,,\n\
         Ann Lee,,,,,,,\n",
    );
    assert_eq!(store.len(), 2);

    let john = store.get(0).unwrap();
    assert_eq!(john.full_name.as_deref(), Some("John Smith"));
    assert_eq!(john.nationality.as_deref(), Some("USA"));
    assert_eq!(john.high_school, None);
    assert_eq!(john.age, Some(22.0));
    assert_eq!(john.normalized_name, "johnsmith");

    let ann = store.get(1).unwrap();
    assert_eq!(ann.college, None);
    assert_eq!(ann.age, None);
}

#[test]
fn decimal_and_non_numeric_ages() {
    let store = players(
        "A,,,,,,,23.0\n\
         B,,,,,,,unknown\n",
    );
    assert_eq!(store.get(0).unwrap().age, Some(23.0));
    assert_eq!(store.get(1).unwrap().age, None);
}

#[test]
fn missing_name_has_empty_key() {
    let store = players(",Canada,,,,,,30\n");
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0).unwrap().normalized_name, "");
}

#[test]
fn extra_columns_are_ignored() {
    let text = "Id,FullName,Nationality,College,HighSchool,Team,Team_Location,League,Age,Position\n\
                7,Bo Jackson,USA,Auburn,McAdory,Raiders,Los Angeles,NFL,28,RB\n";
    let store = RecordStore::from_reader(text.as_bytes(), "wide.csv").unwrap();
    assert_eq!(store.get(0).unwrap().college.as_deref(), Some("Auburn"));
}

#[test]
fn header_names_are_case_sensitive() {
    let text = "fullname,Nationality,College,HighSchool,Team,Team_Location,League,Age\nA,,,,,,,\n";
    let err = RecordStore::from_reader(text.as_bytes(), "lower.csv").unwrap_err();
    assert!(matches!(err.cause, LoadCause::MissingColumn("FullName")));
    assert!(err.to_string().contains("lower.csv"));
}

#[test]
fn missing_file_is_data_unavailable() {
    let path = tmp("does_not_exist.csv");
    let _ = fs::remove_file(&path);
    let err = RecordStore::load(&path).unwrap_err();
    assert!(matches!(err.cause, LoadCause::Io(_)));
    assert_eq!(err.path, path);
}

#[test]
fn invalid_utf8_is_data_unavailable() {
    let mut bytes = HEADER.as_bytes().to_vec();
    bytes.extend_from_slice(b"Jos\xff,,,,,,,\n");
    let err = RecordStore::from_reader(&bytes[..], "bad.csv").unwrap_err();
    assert!(matches!(err.cause, LoadCause::Csv(_)));
}

#[test]
fn load_from_disk() {
    let path = tmp("players.csv");
    fs::write(&path, format!("{HEADER}Ann Lee,Canada,,,,,,19\n")).unwrap();
    let store = RecordStore::load(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.origin(), path.as_path());
    let _ = fs::remove_file(&path);
}

#[test]
fn football_store_columns() {
    let text = "name,team,season\n\
                A. Brown ,X,2020\n\
                ,,\n\
                B,X,\n";
    let fb = FootballStore::from_reader(text.as_bytes(), "fb.csv").unwrap();
    assert_eq!(fb.len(), 2);
    assert_eq!(fb.records()[0].normalized_name, "abrown");
    assert_eq!(fb.records()[0].name.as_deref(), Some("A. Brown"));
    assert_eq!(fb.records()[1].season, None);

    let err = FootballStore::from_reader("name,team\nA,X\n".as_bytes(), "fb.csv").unwrap_err();
    assert!(matches!(err.cause, LoadCause::MissingColumn("season")));
}

#[test]
fn open_fails_when_football_file_is_missing() {
    let players = tmp("open_players.csv");
    fs::write(&players, format!("{HEADER}Ann Lee,Canada,,,,,,19\n")).unwrap();
    let football = tmp("open_missing_football.csv");
    let _ = fs::remove_file(&football);

    let data = DataOptions { players_path: players.clone(), football_path: Some(football.clone()) };
    let err = QueryEngine::open(&data).unwrap_err();
    assert!(matches!(err.cause, LoadCause::Io(_)));
    assert_eq!(err.path, football);
    let _ = fs::remove_file(&players);
}

#[test]
fn open_loads_both_datasets() {
    let players = tmp("open_ok_players.csv");
    let football = tmp("open_ok_football.csv");
    fs::write(&players, format!("{HEADER}Ann Lee,Canada,,,,,,19\n")).unwrap();
    fs::write(&football, "name,team,season\nAnn Lee,X,2020\nBo,X,2020\n").unwrap();

    let data = DataOptions { players_path: players.clone(), football_path: Some(football.clone()) };
    let engine = QueryEngine::open(&data).unwrap();
    assert!(engine.has_football());
    assert_eq!(engine.players().len(), 1);
    assert_eq!(engine.football().map(|f| f.len()), Some(2));

    let players_only = QueryEngine::open(&DataOptions { football_path: None, ..data }).unwrap();
    assert!(!players_only.has_football());

    let _ = fs::remove_file(&players);
    let _ = fs::remove_file(&football);
}
