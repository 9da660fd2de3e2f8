//! In-memory graph store.
//!
//! Interprets [`GraphOperation`]s against a map of named graphs. Graphs are
//! created implicitly by the first write and removed by `DeleteGraph`, which
//! fails with [`StoreError::GraphNotFound`] when the graph is absent.

use crate::error::StoreError;
use crate::statement::{GraphOperation, IndexSpec};
use crate::store::GraphStore;
use alias_generator::{AliasRecord, PersonRecord};
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard};

/// Contents of one in-memory graph.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    pub persons: Vec<PersonRecord>,
    pub aliases: Vec<AliasRecord>,
    /// `aka` edges as (person position, alias position).
    pub aka_edges: Vec<(usize, usize)>,
    pub indexes: BTreeSet<(String, String)>,
}

impl MemoryGraph {
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Ids of all persons in creation order.
    pub fn person_ids(&self) -> Vec<String> {
        self.persons.iter().map(|p| p.id.clone()).collect()
    }

    /// Number of outgoing `aka` edges of the person with `id`.
    pub fn aka_count(&self, id: &str) -> usize {
        self.persons
            .iter()
            .position(|p| p.id == id)
            .map(|pos| self.aka_edges.iter().filter(|(p, _)| *p == pos).count())
            .unwrap_or(0)
    }

    /// Ranks of the aliases attached to the person with `id`, in edge order.
    pub fn alias_ranks(&self, id: &str) -> Vec<i64> {
        let Some(pos) = self.persons.iter().position(|p| p.id == id) else {
            return Vec::new();
        };
        self.aka_edges
            .iter()
            .filter(|(p, _)| *p == pos)
            .map(|(_, a)| self.aliases[*a].rank)
            .collect()
    }

    /// Ids of persons with more than one `aka` edge.
    pub fn multi_alias_person_ids(&self) -> Vec<String> {
        self.persons
            .iter()
            .map(|p| p.id.clone())
            .filter(|id| self.aka_count(id) > 1)
            .collect()
    }

    pub fn has_index(&self, index: &IndexSpec) -> bool {
        self.indexes
            .contains(&(index.label.to_string(), index.property.to_string()))
    }

    fn create_person(&mut self, person: &PersonRecord) {
        let person_pos = self.persons.len();
        self.persons.push(person.clone());
        for alias in person.aliases() {
            let alias_pos = self.aliases.len();
            self.aliases.push(alias.clone());
            self.aka_edges.push((person_pos, alias_pos));
        }
    }
}

#[derive(Default)]
struct MemoryState {
    graphs: HashMap<String, MemoryGraph>,
    operations: Vec<(String, GraphOperation)>,
    /// Zero-based position of the operation that should fail.
    fail_at: Option<usize>,
}

/// Graph store that keeps everything in process memory.
#[derive(Default)]
pub struct MemoryGraphStore {
    state: Mutex<MemoryState>,
}

impl MemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the operation at zero-based position `position` fail with
    /// [`StoreError::Rejected`]. Earlier operations succeed.
    pub fn with_failure_at(self, position: usize) -> Self {
        self.lock().fail_at = Some(position);
        self
    }

    /// Snapshot of the graph named `name`, if it exists.
    pub fn graph(&self, name: &str) -> Option<MemoryGraph> {
        self.lock().graphs.get(name).cloned()
    }

    /// Every operation received so far, including failed ones.
    pub fn operations(&self) -> Vec<(String, GraphOperation)> {
        self.lock().operations.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl GraphStore for MemoryGraphStore {
    async fn execute(&self, graph: &str, operation: &GraphOperation) -> Result<(), StoreError> {
        let mut state = self.lock();
        let position = state.operations.len();
        state
            .operations
            .push((graph.to_string(), operation.clone()));

        if state.fail_at == Some(position) {
            return Err(StoreError::Rejected(format!(
                "injected failure at operation {position}"
            )));
        }

        match operation {
            GraphOperation::DeleteGraph => state
                .graphs
                .remove(graph)
                .map(|_| ())
                .ok_or_else(|| StoreError::GraphNotFound(graph.to_string())),
            GraphOperation::CreateIndex(index) => {
                state
                    .graphs
                    .entry(graph.to_string())
                    .or_default()
                    .indexes
                    .insert((index.label.to_string(), index.property.to_string()));
                Ok(())
            }
            GraphOperation::CreatePerson(person) => {
                state
                    .graphs
                    .entry(graph.to_string())
                    .or_default()
                    .create_person(person);
                Ok(())
            }
        }
    }
}
