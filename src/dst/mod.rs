//! DST - Deterministic Simulation Testing
//!
//! TigerStyle: Seeded randomness and fault injection for the simulated
//! collaborators that stand in for databases, mail servers and downloads.
//!
//! # Usage
//!
//! ```rust
//! use testninja::dst::{FaultConfig, FaultInjector, FaultType, SimConfig};
//!
//! let mut faults = FaultInjector::builder(SimConfig::with_seed(42))
//!     .with_fault(FaultConfig::new(FaultType::DownloadFail, 1.0))
//!     .build();
//!
//! assert!(faults.should_inject(FaultType::DownloadFail));
//! assert!(!faults.should_inject(FaultType::EmailSendFail));
//! ```
//!
//! Run with explicit seed for reproducibility:
//! ```bash
//! DST_SEED=12345 cargo test
//! ```

mod config;
mod fault;
mod rng;

pub use config::SimConfig;
pub use fault::{FaultConfig, FaultInjector, FaultInjectorBuilder, FaultType};
pub use rng::DeterministicRng;
