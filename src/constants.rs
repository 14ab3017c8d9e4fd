//! Constants
//!
//! TigerStyle: Every limit and default has a name, a unit and a place.

// =============================================================================
// Application
// =============================================================================

/// Application name
pub const APP_NAME: &str = "testninja";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Demerit Points
// =============================================================================

/// Speed limit at or below which no points are given
pub const SPEED_LIMIT_KMH: i32 = 65;

/// Kilometres per hour over the limit that cost one demerit point
pub const KMH_PER_DEMERIT_POINT: i32 = 5;

/// Highest speed the calculator accepts
pub const SPEED_KMH_MAX: i32 = 300;

// =============================================================================
// Pricing
// =============================================================================

/// Discount applied to gold customers (fraction of list price)
pub const GOLD_CUSTOMER_DISCOUNT: f64 = 0.3;

// =============================================================================
// Installer Downloads
// =============================================================================

/// Base URL installers are downloaded from
pub const DOWNLOAD_BASE_URL_DEFAULT: &str = "http://example.com";

/// Maximum length of a customer or installer name in bytes
pub const INSTALLER_NAME_BYTES_MAX: usize = 256;

// =============================================================================
// Videos
// =============================================================================

/// File the video service reads the current video from
pub const VIDEO_FILE_NAME_DEFAULT: &str = "video.txt";

/// Maximum size of a video file in bytes
pub const VIDEO_FILE_BYTES_MAX: usize = 64 * 1024;

// =============================================================================
// Housekeeper Statements
// =============================================================================

/// Company name used in statement email subjects
pub const STATEMENT_COMPANY_NAME: &str = "Sandpiper Cleaning Services";

/// Subdirectory of the data directory statements are written to
pub const STATEMENTS_DIR_NAME: &str = "statements";

/// Statement file extension
pub const STATEMENT_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Configuration
// =============================================================================

/// Default data directory (statements, downloaded installers)
pub const DATA_DIR_DEFAULT: &str = "~/.testninja";

// =============================================================================
// DST
// =============================================================================

/// Environment variable holding the simulation seed
pub const DST_SEED_ENV_VAR: &str = "DST_SEED";

/// Maximum number of fault configurations per injector
pub const DST_FAULT_CONFIGS_COUNT_MAX: usize = 64;
