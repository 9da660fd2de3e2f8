//! Record types produced by the dataset generator.

/// Label used for person nodes.
pub const PERSON_LABEL: &str = "Person";

/// Label used for alias nodes.
pub const ALIAS_LABEL: &str = "Alias";

/// Relationship type linking a person to each of its aliases.
pub const AKA_RELATIONSHIP: &str = "aka";

/// An alternate name for a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub moniker: String,
    pub rank: i64,
}

/// A synthetic person together with the aliases it is known by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// Sequence index this record was generated for.
    pub index: u64,
    /// Decimal form of `index`, stored as the node's `id` property.
    pub id: String,
    pub name: String,
    /// Generation time in UTC epoch milliseconds.
    pub creation_timestamp: i64,
    pub certified: bool,
    pub company: String,
    /// Primary alias, always present.
    pub alias: AliasRecord,
    /// Secondary alias attached at augmented batch boundaries.
    pub secondary_alias: Option<AliasRecord>,
}

impl PersonRecord {
    /// Whether this person carries a secondary alias.
    pub fn is_augmented(&self) -> bool {
        self.secondary_alias.is_some()
    }

    /// Number of outgoing `aka` edges this person will be created with.
    pub fn alias_count(&self) -> usize {
        1 + usize::from(self.is_augmented())
    }

    /// All aliases, primary first.
    pub fn aliases(&self) -> impl Iterator<Item = &AliasRecord> {
        std::iter::once(&self.alias).chain(self.secondary_alias.as_ref())
    }
}
