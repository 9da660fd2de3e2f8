//! End-to-end pipeline runs against the in-memory store.

use alias_generator::{GeneratorConfig, PRIMARY_RANK_RANGE, SECONDARY_RANK_RANGE};
use alias_loader::statement::{ALIAS_RANK_INDEX, PERSON_ID_INDEX};
use alias_loader::{
    run_pipeline, GraphOperation, LoadContext, LoaderError, MemoryGraphStore, PipelineConfig,
    StoreError,
};
use std::collections::BTreeSet;

const GRAPH: &str = "ALIAS_GRAPH";

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("alias_loader=debug")
        .try_init()
        .ok(); // Ignore if already initialized
}

fn config(count: i64, augment_probability: f64) -> PipelineConfig {
    PipelineConfig {
        count,
        generator: GeneratorConfig {
            augment_probability,
            ..GeneratorConfig::default()
        },
    }
}

fn index_operation_count(store: &MemoryGraphStore) -> usize {
    store
        .operations()
        .iter()
        .filter(|(_, op)| matches!(op, GraphOperation::CreateIndex(_)))
        .count()
}

#[tokio::test]
async fn test_single_person() {
    init_tracing();
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);

    let metrics = run_pipeline(&ctx, &config(1, 1.0)).await.unwrap();

    let graph = ctx.store.graph(GRAPH).unwrap();
    assert_eq!(metrics.persons_created, 1);
    assert_eq!(graph.person_ids(), vec!["0".to_string()]);
    assert_eq!(graph.aka_count("0"), 1);
}

#[tokio::test]
async fn test_contiguous_unique_ids() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);

    run_pipeline(&ctx, &config(1200, 0.5)).await.unwrap();

    let graph = ctx.store.graph(GRAPH).unwrap();
    let ids: BTreeSet<u64> = graph
        .person_ids()
        .iter()
        .map(|id| id.parse().unwrap())
        .collect();
    assert_eq!(graph.person_count(), 1200);
    assert_eq!(ids, (0..1200).collect::<BTreeSet<u64>>());
    for id in graph.person_ids() {
        let edges = graph.aka_count(&id);
        assert!(edges == 1 || edges == 2, "person {id} has {edges} aliases");
    }
}

#[tokio::test]
async fn test_boundary_person_is_augmented() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);

    let metrics = run_pipeline(&ctx, &config(501, 1.0)).await.unwrap();

    let graph = ctx.store.graph(GRAPH).unwrap();
    assert_eq!(graph.multi_alias_person_ids(), vec!["500".to_string()]);
    assert_eq!(graph.aka_count("499"), 1);
    assert_eq!(metrics.augmented_persons, 1);
    assert_eq!(metrics.aliases_created, 502);
}

#[tokio::test]
async fn test_no_augmentation_at_or_below_one_batch() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);

    run_pipeline(&ctx, &config(500, 1.0)).await.unwrap();

    let graph = ctx.store.graph(GRAPH).unwrap();
    assert!(graph.multi_alias_person_ids().is_empty());
}

#[tokio::test]
async fn test_augmented_subset_is_bounded() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);
    let count = 2750;

    run_pipeline(&ctx, &config(count, 0.5)).await.unwrap();

    let graph = ctx.store.graph(GRAPH).unwrap();
    let augmented = graph.multi_alias_person_ids();
    assert!(augmented.len() <= (count / 500) as usize);
    for id in &augmented {
        let index: u64 = id.parse().unwrap();
        assert!(index > 0 && index % 500 == 0, "unexpected augmented id {id}");
    }
}

#[tokio::test]
async fn test_rank_ranges_are_disjoint() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);

    run_pipeline(&ctx, &config(1500, 1.0)).await.unwrap();

    let graph = ctx.store.graph(GRAPH).unwrap();
    for id in graph.person_ids() {
        let ranks = graph.alias_ranks(&id);
        assert!(PRIMARY_RANK_RANGE.contains(&ranks[0]));
        if let Some(secondary) = ranks.get(1) {
            assert!(SECONDARY_RANK_RANGE.contains(secondary));
        }
    }
}

#[tokio::test]
async fn test_rerun_replaces_previous_dataset() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);

    run_pipeline(&ctx, &config(100, 0.5)).await.unwrap();
    run_pipeline(&ctx, &config(10, 0.5)).await.unwrap();

    let graph = ctx.store.graph(GRAPH).unwrap();
    assert_eq!(graph.person_count(), 10);
    assert!(graph
        .person_ids()
        .iter()
        .all(|id| id.parse::<u64>().unwrap() < 10));
}

#[tokio::test]
async fn test_indexes_created_once_per_run() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);

    run_pipeline(&ctx, &config(0, 0.5)).await.unwrap();

    assert_eq!(index_operation_count(&ctx.store), 2);
    let graph = ctx.store.graph(GRAPH).unwrap();
    assert_eq!(graph.person_count(), 0);
    assert!(graph.has_index(&PERSON_ID_INDEX));
    assert!(graph.has_index(&ALIAS_RANK_INDEX));

    run_pipeline(&ctx, &config(25, 0.5)).await.unwrap();
    assert_eq!(index_operation_count(&ctx.store), 4);
}

#[tokio::test]
async fn test_operation_order() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);

    run_pipeline(&ctx, &config(3, 0.5)).await.unwrap();

    let ops = ctx.store.operations();
    assert_eq!(ops.len(), 6);
    assert!(ops.iter().all(|(graph, _)| graph == GRAPH));
    assert_eq!(ops[0].1, GraphOperation::DeleteGraph);
    for (i, (_, op)) in ops[1..4].iter().enumerate() {
        match op {
            GraphOperation::CreatePerson(person) => assert_eq!(person.id, i.to_string()),
            other => panic!("Expected CreatePerson, got {other:?}"),
        }
    }
    assert_eq!(ops[4].1, GraphOperation::CreateIndex(PERSON_ID_INDEX));
    assert_eq!(ops[5].1, GraphOperation::CreateIndex(ALIAS_RANK_INDEX));
}

#[tokio::test]
async fn test_reset_of_missing_graph_succeeds() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), "never_created");

    run_pipeline(&ctx, &config(0, 0.5)).await.unwrap();
}

#[tokio::test]
async fn test_load_failure_skips_indexing() {
    // Operation 0 is the reset, so the sixth person fails.
    let ctx = LoadContext::new(MemoryGraphStore::new().with_failure_at(6), GRAPH);

    let result = run_pipeline(&ctx, &config(10, 0.5)).await;

    assert!(matches!(
        result,
        Err(LoaderError::CreatePerson {
            source: StoreError::Rejected(_),
            ..
        })
    ));
    assert_eq!(index_operation_count(&ctx.store), 0);
    assert_eq!(ctx.store.graph(GRAPH).unwrap().person_count(), 5);
}

#[tokio::test]
async fn test_invalid_generator_config_fails_before_reset() {
    let ctx = LoadContext::new(MemoryGraphStore::new(), GRAPH);
    let mut bad = config(10, 0.5);
    bad.generator.batch_size = 0;

    let result = run_pipeline(&ctx, &bad).await;

    assert!(matches!(result, Err(LoaderError::Generator(_))));
    assert!(ctx.store.operations().is_empty());
}
