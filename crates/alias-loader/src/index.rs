//! Index creation run after every load.

use crate::error::LoaderError;
use crate::statement::{GraphOperation, IndexSpec, ALIAS_RANK_INDEX, PERSON_ID_INDEX};
use crate::store::{GraphStore, LoadContext};
use tracing::info;

/// Indexes created after a load, in creation order.
pub const INDEXES: [IndexSpec; 2] = [PERSON_ID_INDEX, ALIAS_RANK_INDEX];

/// Create the `Person(id)` and `Alias(rank)` indexes.
pub async fn create_indexes<S: GraphStore>(ctx: &LoadContext<S>) -> Result<(), LoaderError> {
    for index in INDEXES {
        info!(
            "Creating index {} on :{}({}) in graph '{}'",
            index.name, index.label, index.property, ctx.graph
        );
        ctx.execute(&GraphOperation::CreateIndex(index)).await?;
    }
    Ok(())
}
