//! The reset, load and index pipeline.

use crate::error::LoaderError;
use crate::index::create_indexes;
use crate::loader::{LoadMetrics, Loader};
use crate::reset::reset;
use crate::store::{GraphStore, LoadContext};
use alias_generator::{DatasetGenerator, GeneratorConfig};
use std::fmt;
use tracing::info;

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Number of persons to create; zero or less creates none.
    pub count: i64,
    pub generator: GeneratorConfig,
}

/// Stages a run moves through. Any error in a stage ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reset,
    Loading,
    Indexing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Reset => "reset",
            Stage::Loading => "loading",
            Stage::Indexing => "indexing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Reset the graph, load `config.count` persons, then create the indexes.
pub async fn run_pipeline<S: GraphStore>(
    ctx: &LoadContext<S>,
    config: &PipelineConfig,
) -> Result<LoadMetrics, LoaderError> {
    let generator = DatasetGenerator::new(config.generator.clone())?;

    info!("Stage: {}", Stage::Reset);
    reset(ctx).await?;

    info!("Stage: {}", Stage::Loading);
    let metrics = Loader::new(ctx, generator).load(config.count).await?;

    info!("Stage: {}", Stage::Indexing);
    create_indexes(ctx).await?;

    info!("Stage: {}", Stage::Done);
    Ok(metrics)
}
