//! Alias rank generators.

use rand::Rng;
use std::ops::RangeInclusive;

/// Range of primary alias ranks.
pub const PRIMARY_RANK_RANGE: RangeInclusive<i64> = 0..=99;

/// Range of secondary alias ranks. Disjoint from [`PRIMARY_RANK_RANGE`].
pub const SECONDARY_RANK_RANGE: RangeInclusive<i64> = 1000..=1004;

/// Generate a primary alias rank.
pub fn generate_primary_rank<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(PRIMARY_RANK_RANGE)
}

/// Generate a secondary alias rank.
pub fn generate_secondary_rank<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(SECONDARY_RANK_RANGE)
}
