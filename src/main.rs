//! Command-line interface for alias-graph
//!
//! Resets a graph, fills it with synthetic `Person` nodes linked to `Alias`
//! nodes by `aka` relationships, then indexes `Person(id)` and `Alias(rank)`.
//!
//! # Usage Examples
//!
//! ```bash
//! # Load the default 20000 persons into the `neo4j` database
//! alias-graph
//!
//! # Load 500000 persons into another database
//! alias-graph 500000 --graph aliases --neo4j-uri bolt://neo4j:7687
//!
//! # Print the statements without touching a database
//! alias-graph 1000 --dry-run
//! ```
//!
//! Once loaded, a person and its aliases can be looked up with:
//!
//! ```text
//! MATCH (p:Person {id: '18400'})-[:aka]->(a) RETURN p, a
//! ```

use alias_loader::{
    run_pipeline, DryRunStore, GraphStore, LoadArgs, LoadContext, LoadMetrics, Neo4jConnectionArgs,
    Neo4jStore, PipelineConfig,
};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "alias-graph")]
#[command(about = "Seed a graph with synthetic Person/Alias data connected by aka relationships")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    load: LoadArgs,

    #[command(flatten)]
    neo4j: Neo4jConnectionArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = cli.load.pipeline_config();

    let metrics = if cli.load.dry_run {
        info!("Dry run: statements are logged, not executed");
        load(DryRunStore::new(), &cli.load.graph, &config).await?
    } else {
        info!("Connecting to Neo4j as {}", cli.neo4j.target());
        load(Neo4jStore::new(&cli.neo4j), &cli.load.graph, &config).await?
    };

    info!(
        "Graph '{}' ready: {} persons, {} aliases",
        cli.load.graph, metrics.persons_created, metrics.aliases_created
    );
    Ok(())
}

async fn load<S: GraphStore>(
    store: S,
    graph: &str,
    config: &PipelineConfig,
) -> anyhow::Result<LoadMetrics> {
    let ctx = LoadContext::new(store, graph);
    run_pipeline(&ctx, config)
        .await
        .with_context(|| format!("Failed to load graph '{graph}'"))
}
