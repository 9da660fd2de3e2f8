//! Graph store that logs statements instead of executing them.

use crate::error::StoreError;
use crate::statement::GraphOperation;
use crate::store::GraphStore;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Logs every rendered statement at `info` and reports success.
#[derive(Debug, Default)]
pub struct DryRunStore {
    executed: AtomicU64,
}

impl DryRunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements logged so far.
    pub fn executed(&self) -> u64 {
        self.executed.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl GraphStore for DryRunStore {
    async fn execute(&self, graph: &str, operation: &GraphOperation) -> Result<(), StoreError> {
        info!("[dry-run] {}: {}", graph, operation.to_statement());
        self.executed.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
