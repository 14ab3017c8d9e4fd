//! Math

/// Sum of two numbers. Widened so it cannot overflow.
#[must_use]
pub fn add(a: i32, b: i32) -> i64 {
    i64::from(a) + i64::from(b)
}

/// The greater of two numbers.
#[must_use]
pub fn max(a: i32, b: i32) -> i32 {
    if a >= b {
        a
    } else {
        b
    }
}

/// Odd numbers from 1 up to and including `limit`, ascending.
pub fn odd_numbers(limit: i32) -> impl Iterator<Item = i32> {
    (1..=limit).filter(|n| n % 2 != 0)
}
