//! Parameterized Cypher statements for the alias graph.
//!
//! Field values never appear in the statement text; they are bound as
//! parameters and sent to the server separately.

use alias_generator::{PersonRecord, AKA_RELATIONSHIP, ALIAS_LABEL, PERSON_LABEL};
use neo4rs::Query;
use std::fmt;

/// A value bound to a statement parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    String(String),
    Int(i64),
    Bool(bool),
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::String(value)
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::String(value.to_string())
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::String(s) => write!(f, "{s:?}"),
            Param::Int(i) => write!(f, "{i}"),
            Param::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Cypher text plus its bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    cypher: String,
    params: Vec<(String, Param)>,
}

impl Statement {
    pub fn new(cypher: impl Into<String>) -> Self {
        Self {
            cypher: cypher.into(),
            params: Vec::new(),
        }
    }

    /// Bind `value` to `$key`. Rebinding a key replaces the earlier value.
    pub fn bind(mut self, key: &str, value: impl Into<Param>) -> Self {
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
        self
    }

    pub fn cypher(&self) -> &str {
        &self.cypher
    }

    pub fn params(&self) -> &[(String, Param)] {
        &self.params
    }

    /// Look up a bound parameter.
    pub fn param(&self, key: &str) -> Option<&Param> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cypher)?;
        if !self.params.is_empty() {
            let params: Vec<String> = self
                .params
                .iter()
                .map(|(k, v)| format!("{k}: {v}"))
                .collect();
            write!(f, " {{{}}}", params.join(", "))?;
        }
        Ok(())
    }
}

impl From<&Statement> for Query {
    fn from(statement: &Statement) -> Self {
        statement
            .params
            .iter()
            .fold(Query::new(statement.cypher.clone()), |query, (key, value)| {
                match value {
                    Param::String(s) => query.param(key, s.clone()),
                    Param::Int(i) => query.param(key, *i),
                    Param::Bool(b) => query.param(key, *b),
                }
            })
    }
}

/// An index on one property of one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub property: &'static str,
}

/// Index supporting lookups of people by id.
pub const PERSON_ID_INDEX: IndexSpec = IndexSpec {
    name: "person_id",
    label: PERSON_LABEL,
    property: "id",
};

/// Index supporting lookups of aliases by rank.
pub const ALIAS_RANK_INDEX: IndexSpec = IndexSpec {
    name: "alias_rank",
    label: ALIAS_LABEL,
    property: "rank",
};

/// A single operation issued against a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphOperation {
    /// Remove every node and relationship in the graph.
    DeleteGraph,
    /// Create an index if it does not already exist.
    CreateIndex(IndexSpec),
    /// Create a person with one or two `aka` aliases.
    CreatePerson(PersonRecord),
}

impl GraphOperation {
    /// Render the operation as a parameterized statement.
    pub fn to_statement(&self) -> Statement {
        match self {
            GraphOperation::DeleteGraph => Statement::new("MATCH (n) DETACH DELETE n"),
            GraphOperation::CreateIndex(index) => Statement::new(format!(
                "CREATE INDEX {} IF NOT EXISTS FOR (n:{}) ON (n.{})",
                index.name, index.label, index.property
            )),
            GraphOperation::CreatePerson(person) => create_person_statement(person),
        }
    }
}

fn create_person_statement(person: &PersonRecord) -> Statement {
    let mut cypher = format!(
        "CREATE (p:{PERSON_LABEL} {{id: $id, name: $name, creationTimestamp: $creationTimestamp, \
         certified: $certified, company: $company}})\
         -[:{AKA_RELATIONSHIP}]->(:{ALIAS_LABEL} {{moniker: $moniker, rank: $rank}})"
    );
    if person.secondary_alias.is_some() {
        cypher.push_str(&format!(
            ", (p)-[:{AKA_RELATIONSHIP}]->(:{ALIAS_LABEL} {{moniker: $secondMoniker, rank: $secondRank}})"
        ));
    }

    let statement = Statement::new(cypher)
        .bind("id", person.id.as_str())
        .bind("name", person.name.as_str())
        .bind("creationTimestamp", person.creation_timestamp)
        .bind("certified", person.certified)
        .bind("company", person.company.as_str())
        .bind("moniker", person.alias.moniker.as_str())
        .bind("rank", person.alias.rank);

    match &person.secondary_alias {
        Some(alias) => statement
            .bind("secondMoniker", alias.moniker.as_str())
            .bind("secondRank", alias.rank),
        None => statement,
    }
}
