use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// A count of decisions made by frequency since the last decay.
    pub greedy_decisions: usize,

    /// A count of decisions made at random.
    pub random_decisions: usize,

    /// The number of times frequencies have decayed.
    pub decays: usize,

    /// The time taken during a solve.
    pub time: Duration,
}
