//! Reservation
//!
//! Who may cancel a reservation: admins, and whoever made it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identifier
pub type UserId = Uuid;

/// A user of the reservation system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID v4)
    pub id: UserId,
    /// Admins may cancel any reservation
    pub is_admin: bool,
}

impl User {
    /// A regular user with a fresh id.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            is_admin: false,
        }
    }

    /// An admin user with a fresh id.
    #[must_use]
    pub fn admin() -> Self {
        Self {
            id: Uuid::new_v4(),
            is_admin: true,
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

/// A reservation, optionally tied to the user who made it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// User who made the reservation
    pub made_by: Option<UserId>,
}

impl Reservation {
    /// A reservation made by `user`.
    #[must_use]
    pub fn made_by(user: &User) -> Self {
        Self {
            made_by: Some(user.id),
        }
    }

    /// Whether `user` may cancel this reservation.
    #[must_use]
    pub fn can_be_cancelled_by(&self, user: &User) -> bool {
        user.is_admin || self.made_by == Some(user.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_can_cancel() {
        let reservation = Reservation::default();

        assert!(reservation.can_be_cancelled_by(&User::admin()));
    }

    #[test]
    fn test_same_user_can_cancel() {
        let user = User::new();
        let reservation = Reservation::made_by(&user);

        assert!(reservation.can_be_cancelled_by(&user));
    }

    #[test]
    fn test_another_user_cannot_cancel() {
        let reservation = Reservation::made_by(&User::new());

        assert!(!reservation.can_be_cancelled_by(&User::new()));
    }

    #[test]
    fn test_nobody_but_admin_cancels_unowned() {
        let reservation = Reservation::default();

        assert!(!reservation.can_be_cancelled_by(&User::new()));
    }
}
