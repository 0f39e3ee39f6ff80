// src/config/consts.rs

// Datasets
pub const DEFAULT_PLAYERS_FILE: &str = "combined_players_updated.csv";

pub const PLAYER_COLUMNS: [&str; 8] = [
    "FullName", "Nationality", "College", "HighSchool",
    "Team", "Team_Location", "League", "Age",
];
pub const FOOTBALL_COLUMNS: [&str; 3] = ["name", "team", "season"];
pub const TEAMMATE_COLUMNS: [&str; 3] = ["Teammate", "Seasons Together", "Team"];

// Connections
pub const AGE_BAND: f64 = 1.0; // ±years around the subject's age

// Local store (debug log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: u32 = 1500;
pub const WINDOW_H: u32 = 900;
pub const APP_TITLE: &str = "Player Search and Connections";
