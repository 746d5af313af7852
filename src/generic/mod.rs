//! Generic structures, independent of a solve.

pub mod random;
