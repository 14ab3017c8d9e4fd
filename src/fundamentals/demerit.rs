//! Demerit Points
//!
//! TigerStyle: Speeds outside `[0, SPEED_KMH_MAX]` are rejected, not clamped.

use crate::constants::{KMH_PER_DEMERIT_POINT, SPEED_KMH_MAX, SPEED_LIMIT_KMH};

/// Demerit points for driving at `speed_kmh`.
///
/// One point per full `KMH_PER_DEMERIT_POINT` over the limit; nothing at or
/// under the limit.
///
/// # Errors
/// Returns `DemeritError::SpeedOutOfRange` when the speed is negative or
/// above `SPEED_KMH_MAX`.
pub fn calculate_demerit_points(speed_kmh: i32) -> Result<u32, DemeritError> {
    if !(0..=SPEED_KMH_MAX).contains(&speed_kmh) {
        return Err(DemeritError::SpeedOutOfRange {
            speed: speed_kmh,
            max: SPEED_KMH_MAX,
        });
    }

    if speed_kmh <= SPEED_LIMIT_KMH {
        return Ok(0);
    }

    let points = (speed_kmh - SPEED_LIMIT_KMH) / KMH_PER_DEMERIT_POINT;

    // Postcondition
    assert!(points >= 0, "points must be non-negative, got {}", points);
    Ok(points.unsigned_abs())
}

/// Demerit calculation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DemeritError {
    #[error("speed {speed} km/h out of range [0, {max}]")]
    SpeedOutOfRange { speed: i32, max: i32 },
}
