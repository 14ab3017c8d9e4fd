//! FizzBuzz

use serde::Serialize;

/// What a number turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FizzBuzz {
    /// Divisible by 3 only
    Fizz,
    /// Divisible by 5 only
    Buzz,
    /// Divisible by both 3 and 5
    FizzBuzz,
    /// Divisible by neither
    Number(u32),
}

/// Classify a number.
#[must_use]
pub fn output(number: u32) -> FizzBuzz {
    match (number % 3 == 0, number % 5 == 0) {
        (true, true) => FizzBuzz::FizzBuzz,
        (true, false) => FizzBuzz::Fizz,
        (false, true) => FizzBuzz::Buzz,
        (false, false) => FizzBuzz::Number(number),
    }
}

impl std::fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fizz => write!(f, "Fizz"),
            Self::Buzz => write!(f, "Buzz"),
            Self::FizzBuzz => write!(f, "FizzBuzz"),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_divisible_by_3_and_5() {
        assert_eq!(output(15), FizzBuzz::FizzBuzz);
        assert_eq!(output(15).to_string(), "FizzBuzz");
    }

    #[test]
    fn test_divisible_by_3_only() {
        assert_eq!(output(3).to_string(), "Fizz");
    }

    #[test]
    fn test_divisible_by_5_only() {
        assert_eq!(output(5).to_string(), "Buzz");
    }

    #[test]
    fn test_not_divisible_returns_number() {
        assert_eq!(output(1), FizzBuzz::Number(1));
        assert_eq!(output(1).to_string(), "1");
    }

    #[test_case(0, "FizzBuzz" ; "zero is divisible by everything")]
    #[test_case(30, "FizzBuzz")]
    #[test_case(9, "Fizz")]
    #[test_case(10, "Buzz")]
    #[test_case(7, "7")]
    fn test_output_rendering(number: u32, expected: &str) {
        assert_eq!(output(number).to_string(), expected);
    }
}
