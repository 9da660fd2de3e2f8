//! Error types for the alias graph loader.

use thiserror::Error;

/// Neo4j status code returned when the target database does not exist.
pub const DATABASE_NOT_FOUND_CODE: &str = "Neo.ClientError.Database.DatabaseNotFound";

/// Errors raised by a [`GraphStore`](crate::GraphStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// The addressed graph does not exist
    #[error("Graph '{0}' does not exist")]
    GraphNotFound(String),

    /// Neo4j database error
    #[error("Neo4j error: {0}")]
    Neo4j(#[from] neo4rs::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store refused the operation
    #[error("Operation rejected: {0}")]
    Rejected(String),
}

impl StoreError {
    /// Classify a Neo4j error raised against `graph`.
    pub fn from_neo4j(graph: &str, err: neo4rs::Error) -> Self {
        match &err {
            neo4rs::Error::Neo4j(e) if e.code() == DATABASE_NOT_FOUND_CODE => {
                StoreError::GraphNotFound(graph.to_string())
            }
            _ => StoreError::Neo4j(err),
        }
    }
}

/// Errors that can occur while resetting, loading or indexing a graph.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Store error outside of a person creation
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Person creation failed
    #[error("Failed to create person {id}: {source}")]
    CreatePerson {
        id: String,
        #[source]
        source: StoreError,
    },

    /// Generator error
    #[error("Generator error: {0}")]
    Generator(#[from] alias_generator::GeneratorError),
}
