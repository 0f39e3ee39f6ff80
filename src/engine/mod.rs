// src/engine/mod.rs
pub mod connections;
pub mod engine;
pub mod teammates;
pub mod types;

pub use engine::QueryEngine;
pub use types::{
    ConnectionKind, ConnectionTable, Connections, Lookup, QueryOutcome, TeammateAggregate,
};
