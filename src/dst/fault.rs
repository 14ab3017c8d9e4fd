//! Fault Injection
//!
//! TigerStyle: Faults are declared up front, drawn from a seeded RNG, and
//! counted so tests can assert on what actually fired.

use std::collections::HashMap;

use crate::constants::DST_FAULT_CONFIGS_COUNT_MAX;

use super::{DeterministicRng, SimConfig};

// =============================================================================
// Fault Type
// =============================================================================

/// Kinds of faults a simulated collaborator can suffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultType {
    /// Writing to storage fails
    StorageWriteFail,
    /// Reading from storage fails
    StorageReadFail,
    /// A download fails at the network level
    DownloadFail,
    /// Sending an email fails
    EmailSendFail,
}

impl FaultType {
    /// Get string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StorageWriteFail => "storage_write_fail",
            Self::StorageReadFail => "storage_read_fail",
            Self::DownloadFail => "download_fail",
            Self::EmailSendFail => "email_send_fail",
        }
    }
}

impl std::fmt::Display for FaultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Fault Config
// =============================================================================

/// A fault and the probability it fires on each opportunity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultConfig {
    /// Which fault
    pub fault_type: FaultType,
    /// Probability in `[0, 1]`
    pub probability: f64,
}

impl FaultConfig {
    /// Create a fault config.
    ///
    /// # Panics
    /// Panics if probability is outside `[0, 1]`.
    #[must_use]
    pub fn new(fault_type: FaultType, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "fault probability must be in [0, 1], got {}",
            probability
        );
        Self {
            fault_type,
            probability,
        }
    }

    /// A fault that fires every time.
    #[must_use]
    pub fn always(fault_type: FaultType) -> Self {
        Self::new(fault_type, 1.0)
    }
}

// =============================================================================
// Fault Injector
// =============================================================================

/// Decides, deterministically, whether a fault fires.
#[derive(Debug, Clone)]
pub struct FaultInjector {
    rng: DeterministicRng,
    faults: HashMap<FaultType, f64>,
    injected: HashMap<FaultType, u64>,
}

impl FaultInjector {
    /// An injector with no faults registered.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self {
            rng: DeterministicRng::new(config.seed()),
            faults: HashMap::new(),
            injected: HashMap::new(),
        }
    }

    /// An injector that never fires.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(SimConfig::with_seed(0))
    }

    /// Start building an injector.
    #[must_use]
    pub fn builder(config: SimConfig) -> FaultInjectorBuilder {
        FaultInjectorBuilder::new(config)
    }

    /// Register (or replace) a fault.
    ///
    /// # Panics
    /// Panics if more than `DST_FAULT_CONFIGS_COUNT_MAX` faults are registered.
    pub fn register(&mut self, fault: FaultConfig) {
        self.faults.insert(fault.fault_type, fault.probability);

        // Postcondition
        assert!(
            self.faults.len() <= DST_FAULT_CONFIGS_COUNT_MAX,
            "fault configs {} exceed max {}",
            self.faults.len(),
            DST_FAULT_CONFIGS_COUNT_MAX
        );
    }

    /// Roll for a fault. Unregistered faults never fire.
    pub fn should_inject(&mut self, fault_type: FaultType) -> bool {
        let Some(&probability) = self.faults.get(&fault_type) else {
            return false;
        };

        let fire = self.rng.next_bool(probability);
        if fire {
            *self.injected.entry(fault_type).or_insert(0) += 1;
            tracing::debug!(fault = %fault_type, seed = self.rng.seed(), "Injected fault");
        }
        fire
    }

    /// How many times a fault has fired.
    #[must_use]
    pub fn injected_count(&self, fault_type: FaultType) -> u64 {
        self.injected.get(&fault_type).copied().unwrap_or(0)
    }
}

impl Default for FaultInjector {
    fn default() -> Self {
        Self::disabled()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for FaultInjector with fluent API.
#[derive(Debug)]
pub struct FaultInjectorBuilder {
    config: SimConfig,
    faults: Vec<FaultConfig>,
}

impl FaultInjectorBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            faults: Vec::new(),
        }
    }

    /// Add a fault.
    #[must_use]
    pub fn with_fault(mut self, fault: FaultConfig) -> Self {
        self.faults.push(fault);
        self
    }

    /// Build the injector.
    #[must_use]
    pub fn build(self) -> FaultInjector {
        let mut injector = FaultInjector::new(self.config);
        for fault in self.faults {
            injector.register(fault);
        }
        injector
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_fault_never_fires() {
        let mut injector = FaultInjector::new(SimConfig::from_env());

        for _ in 0..100 {
            assert!(!injector.should_inject(FaultType::StorageWriteFail));
        }
        assert_eq!(injector.injected_count(FaultType::StorageWriteFail), 0);
    }

    #[test]
    fn test_always_fault_fires_and_counts() {
        let mut injector = FaultInjector::builder(SimConfig::from_env())
            .with_fault(FaultConfig::always(FaultType::EmailSendFail))
            .build();

        for _ in 0..5 {
            assert!(injector.should_inject(FaultType::EmailSendFail));
        }
        assert_eq!(injector.injected_count(FaultType::EmailSendFail), 5);
    }

    #[test]
    fn test_same_seed_same_faults() {
        let config = SimConfig::from_env();
        let build = || {
            FaultInjector::builder(config)
                .with_fault(FaultConfig::new(FaultType::DownloadFail, 0.5))
                .build()
        };
        let mut a = build();
        let mut b = build();

        let a_rolls: Vec<bool> = (0..64)
            .map(|_| a.should_inject(FaultType::DownloadFail))
            .collect();
        let b_rolls: Vec<bool> = (0..64)
            .map(|_| b.should_inject(FaultType::DownloadFail))
            .collect();
        assert_eq!(a_rolls, b_rolls);
    }

    #[test]
    #[should_panic(expected = "fault probability")]
    fn test_fault_config_rejects_bad_probability() {
        let _ = FaultConfig::new(FaultType::DownloadFail, -0.1);
    }
}
