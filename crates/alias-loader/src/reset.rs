//! Graph reset run before every load.

use crate::error::{LoaderError, StoreError};
use crate::statement::GraphOperation;
use crate::store::{GraphStore, LoadContext};
use tracing::info;

/// Delete everything in the context's graph.
///
/// A graph that does not exist yet counts as already reset.
pub async fn reset<S: GraphStore>(ctx: &LoadContext<S>) -> Result<(), LoaderError> {
    info!("Deleting graph '{}'", ctx.graph);

    match ctx.execute(&GraphOperation::DeleteGraph).await {
        Ok(()) => Ok(()),
        Err(StoreError::GraphNotFound(graph)) => {
            info!("Graph '{}' doesn't exist, continuing", graph);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
