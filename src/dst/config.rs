//! SimConfig - Simulation Seed
//!
//! TigerStyle: Every simulation has a seed, and the seed is logged.

use crate::constants::DST_SEED_ENV_VAR;

/// Configuration for a simulated collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    seed: u64,
}

impl SimConfig {
    /// Use an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Read the seed from `DST_SEED`, or pick a random one.
    ///
    /// The chosen seed is logged so a failing run can be replayed.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading `DST_SEED` through an arbitrary lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = seed_from_lookup(lookup).unwrap_or_else(rand::random);

        tracing::info!(seed, "DST seed (replay with {}={})", DST_SEED_ENV_VAR, seed);
        Self { seed }
    }

    /// The simulation seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Seed named by `DST_SEED`. Unparsable values are logged and ignored.
fn seed_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<u64> {
    let value = lookup(DST_SEED_ENV_VAR)?;
    match value.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            tracing::warn!(value = %value, "Ignoring unparsable {}", DST_SEED_ENV_VAR);
            None
        }
    }
}
