//! Sources of randomness.
//!
//! Any [rng](rand::Rng) may be given to a [GenericContext](crate::context::GenericContext).
//! Though, [MinimalPCG32] is used by default, as it is small, fast, and reproducible from a seed.

mod minimal_pcg;

pub use minimal_pcg::MinimalPCG32;
