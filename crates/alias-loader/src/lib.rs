//! Reset, bulk-load and index pipeline for the alias graph.
//!
//! The pipeline seeds a graph store with synthetic `Person` nodes, each linked
//! to one or two `Alias` nodes by an `aka` relationship.
//!
//! # Overview
//!
//! ```text
//! reset ──▶ load (index 0..count) ──▶ create indexes
//! ```
//!
//! Every stage talks to the store through a [`LoadContext`] holding a
//! [`GraphStore`] and the graph identifier. [`Neo4jStore`] executes over Bolt,
//! [`DryRunStore`] only logs, and [`MemoryGraphStore`] keeps the graph in
//! memory.
//!
//! # Example
//!
//! ```ignore
//! use alias_loader::{run_pipeline, LoadContext, MemoryGraphStore, PipelineConfig};
//! use alias_generator::GeneratorConfig;
//!
//! let ctx = LoadContext::new(MemoryGraphStore::new(), "ALIAS_GRAPH");
//! let config = PipelineConfig { count: 1000, generator: GeneratorConfig::default() };
//! let metrics = run_pipeline(&ctx, &config).await?;
//!
//! println!("Created {} persons in {:?}", metrics.persons_created, metrics.total_duration);
//! ```

pub mod args;
mod dry_run;
mod error;
mod index;
mod loader;
mod memory;
mod neo4j;
mod pipeline;
mod reset;
pub mod statement;
mod store;

pub use args::{LoadArgs, Neo4jConnectionArgs};
pub use dry_run::DryRunStore;
pub use error::{LoaderError, StoreError, DATABASE_NOT_FOUND_CODE};
pub use index::{create_indexes, INDEXES};
pub use loader::{LoadMetrics, Loader};
pub use memory::{MemoryGraph, MemoryGraphStore};
pub use neo4j::Neo4jStore;
pub use pipeline::{run_pipeline, PipelineConfig, Stage};
pub use reset::reset;
pub use statement::{GraphOperation, IndexSpec, Param, Statement};
pub use store::{GraphStore, LoadContext};
