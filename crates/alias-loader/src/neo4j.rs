//! Neo4j-backed graph store.
//!
//! The graph identifier selects the Neo4j database. One driver handle is kept
//! per database and reused for the lifetime of the store.

use crate::args::Neo4jConnectionArgs;
use crate::error::StoreError;
use crate::statement::GraphOperation;
use crate::store::GraphStore;
use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Query};
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

/// Graph store executing operations over Bolt.
///
/// Each operation runs in its own explicit transaction and is never retried.
pub struct Neo4jStore {
    uri: String,
    username: String,
    password: String,
    graphs: Mutex<HashMap<String, Graph>>,
}

impl Neo4jStore {
    /// Create a store for the given connection settings.
    ///
    /// Connections are opened lazily on the first operation against each graph.
    pub fn new(args: &Neo4jConnectionArgs) -> Self {
        Self {
            uri: args.neo4j_uri.clone(),
            username: args.neo4j_username.clone(),
            password: args.neo4j_password.clone(),
            graphs: Mutex::new(HashMap::new()),
        }
    }

    /// Get or open the driver handle for database `name`.
    async fn graph(&self, name: &str) -> Result<Graph, StoreError> {
        let mut graphs = self.graphs.lock().await;
        if let Some(graph) = graphs.get(name) {
            return Ok(graph.clone());
        }

        let config = ConfigBuilder::default()
            .uri(self.uri.as_str())
            .user(self.username.as_str())
            .password(self.password.as_str())
            .db(name)
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        let graph = Graph::connect(config).map_err(|e| StoreError::Connection(e.to_string()))?;
        graphs.insert(name.to_string(), graph.clone());
        Ok(graph)
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn execute(&self, graph: &str, operation: &GraphOperation) -> Result<(), StoreError> {
        let statement = operation.to_statement();
        debug!("Neo4j statement: {}", statement);

        // One attempt per operation. Graph::run would resubmit transient failures.
        let handle = self.graph(graph).await?;
        let mut txn = handle
            .start_txn()
            .await
            .map_err(|e| StoreError::from_neo4j(graph, e))?;
        txn.run(Query::from(&statement))
            .await
            .map_err(|e| StoreError::from_neo4j(graph, e))?;
        txn.commit()
            .await
            .map_err(|e| StoreError::from_neo4j(graph, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::PERSON_ID_INDEX;
    use std::time::Duration;

    fn unreachable_store() -> Neo4jStore {
        Neo4jStore::new(&Neo4jConnectionArgs {
            neo4j_uri: "bolt://127.0.0.1:1".to_string(),
            neo4j_username: "neo4j".to_string(),
            neo4j_password: "password".to_string(),
        })
    }

    #[tokio::test]
    async fn test_failed_operation_is_reported_without_resubmitting() {
        let store = unreachable_store();

        let result = tokio::time::timeout(
            Duration::from_secs(30),
            store.execute("neo4j", &GraphOperation::CreateIndex(PERSON_ID_INDEX)),
        )
        .await
        .expect("failure should surface without a backoff loop");

        assert!(result.is_err());
    }
}
