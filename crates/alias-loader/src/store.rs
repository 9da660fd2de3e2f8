//! The graph store seam and the context shared by every pipeline stage.

use crate::error::StoreError;
use crate::statement::GraphOperation;
use async_trait::async_trait;

/// A service that executes graph operations.
///
/// Each call blocks until the store has acknowledged the operation.
/// `GraphStore::execute` must report a missing graph as
/// [`StoreError::GraphNotFound`].
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn execute(&self, graph: &str, operation: &GraphOperation) -> Result<(), StoreError>;
}

/// Store handle and graph identifier, created once and passed to each stage.
pub struct LoadContext<S> {
    pub store: S,
    pub graph: String,
}

impl<S: GraphStore> LoadContext<S> {
    pub fn new(store: S, graph: impl Into<String>) -> Self {
        Self {
            store,
            graph: graph.into(),
        }
    }

    /// Execute one operation against this context's graph.
    pub async fn execute(&self, operation: &GraphOperation) -> Result<(), StoreError> {
        self.store.execute(&self.graph, operation).await
    }
}
