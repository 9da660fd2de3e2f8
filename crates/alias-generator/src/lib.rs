//! Synthetic dataset generator for alias-graph loads.
//!
//! This crate provides the `DatasetGenerator` which produces one synthetic
//! person per sequential index. Every person is known by a primary alias;
//! at batch boundaries a person may additionally receive a secondary alias
//! with an elevated rank.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig { seed, batch_size, augment_probability }
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │   DatasetGenerator   │
//! │                      │
//! │  - rng (StdRng)      │  field content
//! │  - augment_rng       │  boundary coin
//! │  - index             │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    PersonRecord { id, name, company, alias, secondary_alias }
//! ```
//!
//! # Example
//!
//! ```rust
//! use alias_generator::DatasetGenerator;
//!
//! let mut generator = DatasetGenerator::from_seed(42);
//! let person = generator.next_record();
//! assert_eq!(person.id, "0");
//! assert_eq!(person.alias_count(), 1);
//! ```

pub mod generator;
pub mod generators;
pub mod record;

// Re-exports for convenience
pub use generator::{
    DatasetGenerator, GeneratorConfig, GeneratorError, RecordIterator,
    DEFAULT_AUGMENT_PROBABILITY, DEFAULT_BATCH_SIZE, DEFAULT_SEED,
};
pub use generators::{PRIMARY_RANK_RANGE, SECONDARY_RANK_RANGE};
pub use record::{AliasRecord, PersonRecord, AKA_RELATIONSHIP, ALIAS_LABEL, PERSON_LABEL};
