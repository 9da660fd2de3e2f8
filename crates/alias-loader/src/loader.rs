//! Sequential bulk loader for person records.

use crate::error::LoaderError;
use crate::statement::GraphOperation;
use crate::store::{GraphStore, LoadContext};
use alias_generator::DatasetGenerator;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from a load.
#[derive(Debug, Clone, Default)]
pub struct LoadMetrics {
    /// Number of person nodes created.
    pub persons_created: u64,
    /// Number of alias nodes created, one per `aka` edge.
    pub aliases_created: u64,
    /// Number of persons created with a secondary alias.
    pub augmented_persons: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating records.
    pub generation_duration: Duration,
    /// Time spent waiting on the store.
    pub store_duration: Duration,
}

impl LoadMetrics {
    /// Calculate persons per second.
    pub fn persons_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.persons_created as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Drives a [`DatasetGenerator`] and creates one person per index.
///
/// Each creation is acknowledged by the store before the next record is
/// generated. Nothing is retried.
pub struct Loader<'a, S> {
    ctx: &'a LoadContext<S>,
    generator: DatasetGenerator,
}

impl<'a, S: GraphStore> Loader<'a, S> {
    pub fn new(ctx: &'a LoadContext<S>, generator: DatasetGenerator) -> Self {
        Self { ctx, generator }
    }

    /// Index of the next person to be created.
    pub fn current_index(&self) -> u64 {
        self.generator.current_index()
    }

    /// Create `count` persons. A count of zero or less loads nothing.
    pub async fn load(&mut self, count: i64) -> Result<LoadMetrics, LoaderError> {
        let start_time = Instant::now();
        let mut metrics = LoadMetrics::default();
        let count = u64::try_from(count).unwrap_or(0);
        let batch_size = self.generator.config().batch_size;

        info!(
            "Loading {} persons into graph '{}' (batch size: {})",
            count, self.ctx.graph, batch_size
        );

        let mut generation_time = Duration::ZERO;
        let mut store_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let person = self.generator.next_record();
            generation_time += gen_start.elapsed();

            let aliases = person.alias_count() as u64;
            let augmented = person.is_augmented();
            let id = person.id.clone();

            let store_start = Instant::now();
            self.ctx
                .execute(&GraphOperation::CreatePerson(person))
                .await
                .map_err(|source| LoaderError::CreatePerson { id, source })?;
            store_time += store_start.elapsed();

            metrics.persons_created += 1;
            metrics.aliases_created += aliases;
            if augmented {
                metrics.augmented_persons += 1;
            }

            if metrics.persons_created % batch_size == 0 {
                debug!(
                    "Batch {} complete: {} persons created, {} remaining",
                    metrics.persons_created / batch_size,
                    metrics.persons_created,
                    count - metrics.persons_created
                );
            }
        }

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.store_duration = store_time;

        info!(
            "Load complete: {} persons, {} aliases ({} with a secondary alias) in {:?} ({:.2} persons/sec)",
            metrics.persons_created,
            metrics.aliases_created,
            metrics.augmented_persons,
            metrics.total_duration,
            metrics.persons_per_second()
        );

        Ok(metrics)
    }
}
