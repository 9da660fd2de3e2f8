//! Main dataset generator producing person records.

use crate::generators::{
    generate_company, generate_moniker, generate_name, generate_primary_rank,
    generate_secondary_rank, generate_timestamp_now,
};
use crate::record::{AliasRecord, PersonRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default number of records per batch. Every non-zero multiple of this is a
/// batch boundary.
pub const DEFAULT_BATCH_SIZE: u64 = 500;

/// Default probability that a batch-boundary record receives a second alias.
pub const DEFAULT_AUGMENT_PROBABILITY: f64 = 0.5;

/// Default seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Batch size of zero
    #[error("Batch size must be greater than zero")]
    InvalidBatchSize,

    /// Probability outside of [0, 1]
    #[error("Augment probability must be within [0, 1], got {0}")]
    InvalidAugmentProbability(f64),
}

/// Settings for a [`DatasetGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Seed for field content, the augmentation coin and secondary aliases.
    pub seed: u64,
    /// Distance between batch boundaries.
    pub batch_size: u64,
    /// Chance that a boundary record is augmented. `0.0` suppresses and
    /// `1.0` forces augmentation.
    pub augment_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            batch_size: DEFAULT_BATCH_SIZE,
            augment_probability: DEFAULT_AUGMENT_PROBABILITY,
        }
    }
}

impl GeneratorConfig {
    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.batch_size == 0 {
            return Err(GeneratorError::InvalidBatchSize);
        }
        if !(0.0..=1.0).contains(&self.augment_probability) {
            return Err(GeneratorError::InvalidAugmentProbability(
                self.augment_probability,
            ));
        }
        Ok(())
    }
}

/// Generator of synthetic person records.
///
/// Primary field content, the augmentation decision and secondary aliases
/// come from three independently seeded RNGs, so forcing or suppressing
/// augmentation does not change the names, monikers or ranks of any person's
/// primary fields.
pub struct DatasetGenerator {
    config: GeneratorConfig,
    /// RNG for field content
    rng: StdRng,
    /// RNG for the batch-boundary augmentation coin
    augment_rng: StdRng,
    /// RNG for secondary alias content
    secondary_rng: StdRng,
    /// Index of the next record produced by `next_record`
    index: u64,
}

impl DatasetGenerator {
    /// Create a generator from validated settings.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Create a generator with default settings and the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_config(GeneratorConfig {
            seed,
            ..GeneratorConfig::default()
        })
    }

    fn with_config(config: GeneratorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            augment_rng: StdRng::seed_from_u64(augment_seed(config.seed)),
            secondary_rng: StdRng::seed_from_u64(secondary_seed(config.seed)),
            config,
            index: 0,
        }
    }

    /// Set the starting index for record generation.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Get the current record index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get the generator settings.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Whether `index` is a batch boundary eligible for augmentation.
    ///
    /// Index 0 starts the first batch and is never a boundary.
    pub fn is_batch_boundary(&self, index: u64) -> bool {
        index > 0 && index % self.config.batch_size == 0
    }

    /// Generate the record for `index` with its primary alias only.
    pub fn generate(&mut self, index: u64) -> PersonRecord {
        let name = generate_name(&mut self.rng);
        let moniker = generate_moniker(&mut self.rng);
        let company = generate_company(&mut self.rng);
        let rank = generate_primary_rank(&mut self.rng);

        PersonRecord {
            index,
            id: index.to_string(),
            name,
            creation_timestamp: generate_timestamp_now(),
            certified: true,
            company,
            alias: AliasRecord { moniker, rank },
            secondary_alias: None,
        }
    }

    /// Attach a secondary alias to `record`.
    pub fn augment(&mut self, record: &mut PersonRecord) {
        let moniker = generate_moniker(&mut self.secondary_rng);
        let rank = generate_secondary_rank(&mut self.secondary_rng);
        record.secondary_alias = Some(AliasRecord { moniker, rank });
    }

    /// Produce the record for the current index and advance.
    ///
    /// A record at a batch boundary is augmented when the augmentation coin
    /// comes up; the coin is only flipped at boundaries.
    pub fn next_record(&mut self) -> PersonRecord {
        let index = self.index;
        let mut record = self.generate(index);

        if self.is_batch_boundary(index)
            && self.augment_rng.gen_bool(self.config.augment_probability)
        {
            self.augment(&mut record);
            debug!("Augmented person {} with a secondary alias", record.id);
        }

        self.index += 1;
        record
    }

    /// Generate `count` records lazily, continuing from the current index.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Seed for the augmentation RNG, derived from the base seed.
fn augment_seed(seed: u64) -> u64 {
    seed.wrapping_add(0x9E3779B97F4A7C15)
}

/// Seed for the secondary alias RNG, derived from the base seed.
fn secondary_seed(seed: u64) -> u64 {
    seed.wrapping_add(0x9E3779B97F4A7C15_u64.wrapping_mul(2))
}

/// Iterator that lazily generates person records.
pub struct RecordIterator<'a> {
    generator: &'a mut DatasetGenerator,
    remaining: u64,
}

impl Iterator for RecordIterator<'_> {
    type Item = PersonRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecordIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{PRIMARY_RANK_RANGE, SECONDARY_RANK_RANGE};

    fn generator_with_probability(augment_probability: f64) -> DatasetGenerator {
        DatasetGenerator::new(GeneratorConfig {
            augment_probability,
            ..GeneratorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_generate_single_record() {
        let mut generator = DatasetGenerator::from_seed(42);

        let record = generator.next_record();

        assert_eq!(record.index, 0);
        assert_eq!(record.id, "0");
        assert!(record.certified);
        assert!(record.creation_timestamp > 0);
        assert!(PRIMARY_RANK_RANGE.contains(&record.alias.rank));
        assert!(record.secondary_alias.is_none());
        assert!(!record.name.contains('\''));
        assert!(!record.company.contains('\''));
        assert!(!record.alias.moniker.contains('\''));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = DatasetGenerator::from_seed(42);
        let mut gen2 = DatasetGenerator::from_seed(42);

        let row1 = gen1.next_record();
        let row2 = gen2.next_record();

        assert_eq!(row1.name, row2.name);
        assert_eq!(row1.company, row2.company);
        assert_eq!(row1.alias, row2.alias);
    }

    #[test]
    fn test_sequential_ids() {
        let mut generator = DatasetGenerator::from_seed(42);

        let records: Vec<_> = generator.records(10).collect();

        assert_eq!(records.len(), 10);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.index, i as u64);
            assert_eq!(record.id, i.to_string());
        }
        assert_eq!(generator.current_index(), 10);
    }

    #[test]
    fn test_batch_boundaries() {
        let generator = DatasetGenerator::from_seed(42);

        assert!(!generator.is_batch_boundary(0));
        assert!(!generator.is_batch_boundary(1));
        assert!(!generator.is_batch_boundary(499));
        assert!(generator.is_batch_boundary(500));
        assert!(!generator.is_batch_boundary(501));
        assert!(generator.is_batch_boundary(1000));
    }

    #[test]
    fn test_forced_augmentation_hits_only_boundaries() {
        let mut generator = generator_with_probability(1.0);

        let augmented: Vec<u64> = generator
            .records(1501)
            .filter(|r| r.is_augmented())
            .map(|r| r.index)
            .collect();

        assert_eq!(augmented, vec![500, 1000, 1500]);
    }

    #[test]
    fn test_suppressed_augmentation() {
        let mut generator = generator_with_probability(0.0);

        assert!(generator.records(2001).all(|r| !r.is_augmented()));
    }

    #[test]
    fn test_secondary_rank_range() {
        let mut generator = generator_with_probability(1.0).with_start_index(500);

        let record = generator.next_record();
        let secondary = record.secondary_alias.expect("boundary record is augmented");
        assert!(SECONDARY_RANK_RANGE.contains(&secondary.rank));
        assert!(!secondary.moniker.contains('\''));
    }

    #[test]
    fn test_augmentation_does_not_change_field_content() {
        let mut forced = generator_with_probability(1.0);
        let mut suppressed = generator_with_probability(0.0);

        let forced_rows: Vec<_> = forced.records(1502).collect();
        let suppressed_rows: Vec<_> = suppressed.records(1502).collect();

        assert_eq!(forced_rows.len(), suppressed_rows.len());
        for (a, b) in forced_rows.iter().zip(&suppressed_rows) {
            assert_eq!(a.index, b.index);
            assert_eq!(a.name, b.name, "name differs at index {}", a.index);
            assert_eq!(a.company, b.company, "company differs at index {}", a.index);
            assert_eq!(a.alias, b.alias, "alias differs at index {}", a.index);
        }
        assert_eq!(forced_rows.iter().filter(|r| r.is_augmented()).count(), 3);
    }

    #[test]
    fn test_invalid_config() {
        let zero_batch = GeneratorConfig {
            batch_size: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            DatasetGenerator::new(zero_batch),
            Err(GeneratorError::InvalidBatchSize)
        ));

        let bad_probability = GeneratorConfig {
            augment_probability: 1.5,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            DatasetGenerator::new(bad_probability),
            Err(GeneratorError::InvalidAugmentProbability(_))
        ));
    }
}
