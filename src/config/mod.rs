/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Each option is a [ConfigOption], which pairs a value with the bounds a front end (e.g. the CLI) should respect when revising the value.

Some parts of the decision procedure are fixed, rather than configurable:
- The 'greedy' path is always taken while fewer than half of the atoms have a value.
- Frequencies are halved on each decay.
- The polarity of a decision follows the sign of the net polarity count of the chosen atom.

# Example

```rust
# use marten_sat::config::Config;
let mut config = Config::default();
assert!(config.random_decision_bias.set(0.0));
assert!(!config.random_decision_bias.set(2.0));
assert_eq!(config.random_decision_bias.value, 0.0);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation for the probability of making a random decision
pub type RandomDecisionBias = f64;

/// Representation for the multiple of the atom count between decays of frequency.
pub type DecayInterval = usize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The probability of choosing an atom at random, once at least half of the atoms have a value.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Frequencies decay after `decay_interval` × (the count of atoms) greedy decisions.
    pub decay_interval: ConfigOption<DecayInterval>,

    /// The seed used to initialise the source of randomness of a [Context](crate::context::Context).
    pub rng_seed: ConfigOption<u64>,

    /// The time limit for a solve, if any.
    pub time_limit: Option<std::time::Duration>,

    /// The maximum number of decisions to make during a solve, if any.
    pub decision_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.4,
            },

            decay_interval: ConfigOption {
                name: "decay_interval",
                min: 1,
                max: DecayInterval::MAX,
                value: 20,
            },

            rng_seed: ConfigOption {
                name: "rng_seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            time_limit: None,

            decision_limit: None,
        }
    }
}
