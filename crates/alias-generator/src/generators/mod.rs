//! Individual value generators for person and alias fields.

pub mod rank;
pub mod text;
pub mod timestamp;

pub use rank::{
    generate_primary_rank, generate_secondary_rank, PRIMARY_RANK_RANGE, SECONDARY_RANK_RANGE,
};
pub use text::{generate_company, generate_moniker, generate_name, strip_quotes};
pub use timestamp::generate_timestamp_now;
