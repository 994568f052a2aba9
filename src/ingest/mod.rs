//! CSV ingestion feeds
//!
//! Collaborator glue between raw CSV rows and the graph's ingestion
//! operations. Rows are fed in file order: the user feed first, then the
//! connection feed (a connection row naming a not-yet-registered user is
//! silently dropped by the graph, by contract).

use crate::graph::{GraphError, SocialGraph, Username, Weight};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors surfaced while feeding CSV rows into the graph
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read feed: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: expected {expected} fields, got {got}")]
    MalformedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("row {row}: {source}")]
    InvalidWeight {
        row: usize,
        #[source]
        source: GraphError,
    },
}

pub type IngestResult<T> = Result<T, IngestError>;

/// Feed `name,username` rows into [`SocialGraph::ensure_user`]
///
/// Headerless CSV, one registration per row in file order. Returns the
/// number of rows fed.
pub fn load_users(graph: &mut SocialGraph, path: impl AsRef<Path>) -> IngestResult<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        let row = rows + 1;
        let (name, username) = match (record.get(0), record.get(1)) {
            (Some(name), Some(username)) => (name, username),
            _ => {
                return Err(IngestError::MalformedRow {
                    row,
                    expected: 2,
                    got: record.len(),
                })
            }
        };
        graph.ensure_user(name, username);
        rows += 1;
    }

    info!(rows, "user feed ingested");
    Ok(rows)
}

/// Feed `origin,destiny,weight` rows into
/// [`SocialGraph::ensure_connection`]
///
/// The weight field must parse as a base-10 integer; a row that does not
/// stops ingestion with [`IngestError::InvalidWeight`], leaving rows
/// already fed intact. Returns the number of rows fed.
pub fn load_connections(graph: &mut SocialGraph, path: impl AsRef<Path>) -> IngestResult<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        let row = rows + 1;
        let (origin, destiny, weight) = match (record.get(0), record.get(1), record.get(2)) {
            (Some(origin), Some(destiny), Some(weight)) => (origin, destiny, weight),
            _ => {
                return Err(IngestError::MalformedRow {
                    row,
                    expected: 3,
                    got: record.len(),
                })
            }
        };
        let weight: Weight = weight
            .parse()
            .map_err(|source| IngestError::InvalidWeight { row, source })?;

        graph.ensure_connection(&Username::from(origin), &Username::from(destiny), weight);
        rows += 1;
    }

    info!(rows, "connection feed ingested");
    Ok(rows)
}
