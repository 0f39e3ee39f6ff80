// src/gui/components/mod.rs
pub mod connections;
pub mod data_table;
pub mod player_card;
pub mod search_bar;
pub mod status_bar;
