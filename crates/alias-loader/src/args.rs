//! CLI argument definitions for the alias graph loader.

use alias_generator::{
    GeneratorConfig, DEFAULT_AUGMENT_PROBABILITY, DEFAULT_BATCH_SIZE, DEFAULT_SEED,
};
use clap::Args;

use crate::pipeline::PipelineConfig;

/// Default number of persons to create.
pub const DEFAULT_PERSON_COUNT: i64 = 20_000;

/// Default graph identifier (Neo4j database name).
pub const DEFAULT_GRAPH: &str = "neo4j";

/// Neo4j connection arguments.
#[derive(Args, Clone, Debug)]
pub struct Neo4jConnectionArgs {
    /// Neo4j connection string (e.g., bolt://localhost:7687)
    #[arg(long, env = "NEO4J_URI", default_value = "bolt://localhost:7687")]
    pub neo4j_uri: String,

    /// Neo4j username
    #[arg(long, env = "NEO4J_USERNAME", default_value = "neo4j")]
    pub neo4j_username: String,

    /// Neo4j password
    #[arg(long, env = "NEO4J_PASSWORD", default_value = "password")]
    pub neo4j_password: String,
}

impl Neo4jConnectionArgs {
    /// `user@uri` for log lines. Never includes the password, and strips any
    /// credentials embedded in the URI.
    pub fn target(&self) -> String {
        let uri = match (self.neo4j_uri.find("://"), self.neo4j_uri.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}{}", &self.neo4j_uri[..scheme_end + 3], &self.neo4j_uri[at + 1..])
            }
            _ => self.neo4j_uri.clone(),
        };
        format!("{}@{}", self.neo4j_username, uri)
    }
}

/// Arguments controlling what gets loaded.
#[derive(Args, Clone, Debug)]
pub struct LoadArgs {
    /// Number of Person nodes to create
    #[arg(value_name = "COUNT", default_value_t = DEFAULT_PERSON_COUNT, allow_negative_numbers = true)]
    pub count: i64,

    /// Neo4j database to reset and load. The reset deletes every node in
    /// that database, not only previously loaded Person/Alias nodes.
    #[arg(long, default_value = DEFAULT_GRAPH)]
    pub graph: String,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Distance between indices eligible for a second alias
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: u64,

    /// Probability that a batch-boundary person receives a second alias
    #[arg(long, default_value_t = DEFAULT_AUGMENT_PROBABILITY)]
    pub augment_probability: f64,

    /// Log the statements instead of executing them
    #[arg(long)]
    pub dry_run: bool,
}

impl LoadArgs {
    /// Generator settings derived from these arguments.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.seed,
            batch_size: self.batch_size,
            augment_probability: self.augment_probability,
        }
    }

    /// Pipeline settings derived from these arguments.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            count: self.count,
            generator: self.generator_config(),
        }
    }
}
