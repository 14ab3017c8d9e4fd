//! Booking - Overlap Detection
//!
//! TigerStyle: The repository seam is injected per call, so the overlap
//! rule can be tested against any set of active bookings.
//!
//! Two stays overlap when each one arrives before the other departs:
//! `a.arrival < b.departure && b.arrival < a.departure`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

// =============================================================================
// Types
// =============================================================================

/// Booking identifier
pub type BookingId = u64;

/// Status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting confirmation
    Pending,
    /// Confirmed by the guest
    Confirmed,
    /// Cancelled; never overlaps anything
    Cancelled,
}

/// A stay between arrival and departure.
///
/// Deserialization goes through the same check as `Booking::new`, so a
/// record whose departure is not after its arrival is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookingRecord")]
pub struct Booking {
    /// Unique identifier
    pub id: BookingId,
    /// Current status
    pub status: BookingStatus,
    /// Arrival time
    pub arrival: DateTime<Utc>,
    /// Departure time
    pub departure: DateTime<Utc>,
    /// Human-readable reference shown to guests
    pub reference: String,
}

/// Wire form of a booking, validated into `Booking`.
#[derive(Debug, Deserialize)]
struct BookingRecord {
    id: BookingId,
    status: BookingStatus,
    arrival: DateTime<Utc>,
    departure: DateTime<Utc>,
    reference: String,
}

impl TryFrom<BookingRecord> for Booking {
    type Error = BookingError;

    fn try_from(record: BookingRecord) -> Result<Self, Self::Error> {
        if record.arrival >= record.departure {
            return Err(BookingError::InvalidPeriod {
                arrival: record.arrival,
                departure: record.departure,
            });
        }

        Ok(Self {
            id: record.id,
            status: record.status,
            arrival: record.arrival,
            departure: record.departure,
            reference: record.reference,
        })
    }
}

impl Booking {
    /// Create a confirmed booking.
    ///
    /// # Panics
    /// Panics if departure is not after arrival.
    #[must_use]
    pub fn new(
        id: BookingId,
        reference: impl Into<String>,
        arrival: DateTime<Utc>,
        departure: DateTime<Utc>,
    ) -> Self {
        // Precondition
        assert!(
            arrival < departure,
            "departure {} must be after arrival {}",
            departure,
            arrival
        );

        Self {
            id,
            status: BookingStatus::Confirmed,
            arrival,
            departure,
            reference: reference.into(),
        }
    }

    /// Same booking with a different status.
    #[must_use]
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Check if booking is cancelled
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Whether the two stays share any time.
    #[must_use]
    pub fn overlaps(&self, other: &Booking) -> bool {
        self.arrival < other.departure && other.arrival < self.departure
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Source of active (non-cancelled) bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Active bookings, optionally leaving one out.
    async fn active_bookings(
        &self,
        excluded: Option<BookingId>,
    ) -> Result<Vec<Booking>, BookingError>;
}

/// Booking repository held in memory.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `bookings`.
    #[must_use]
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(bookings),
        }
    }

    /// Add a booking.
    pub async fn insert(&self, booking: Booking) {
        self.bookings.write().await.push(booking);
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn active_bookings(
        &self,
        excluded: Option<BookingId>,
    ) -> Result<Vec<Booking>, BookingError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| !b.is_cancelled())
            .filter(|b| excluded != Some(b.id))
            .cloned()
            .collect())
    }
}

// =============================================================================
// Overlap
// =============================================================================

/// Reference of the first active booking that overlaps `booking`.
///
/// A cancelled booking never overlaps, and the repository is not consulted.
///
/// # Errors
/// Propagates repository failures.
pub async fn overlapping_booking(
    booking: &Booking,
    repository: &dyn BookingRepository,
) -> Result<Option<String>, BookingError> {
    if booking.is_cancelled() {
        return Ok(None);
    }

    let bookings = repository.active_bookings(Some(booking.id)).await?;
    let overlapping = bookings
        .into_iter()
        .find(|other| booking.overlaps(other))
        .map(|other| other.reference);

    if let Some(reference) = &overlapping {
        tracing::debug!(
            booking_id = booking.id,
            reference = %reference,
            "Found overlapping booking"
        );
    }

    Ok(overlapping)
}

// =============================================================================
// Errors
// =============================================================================

/// Booking-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("booking repository unavailable: {0}")]
    Repository(String),

    #[error("departure {departure} must be after arrival {arrival}")]
    InvalidPeriod {
        arrival: DateTime<Utc>,
        departure: DateTime<Utc>,
    },
}

// =============================================================================
// Tests
// =============================================================================
