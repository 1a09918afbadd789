//! Error types for the lunara-calendar crate.

use crate::{MAX_YEAR, MIN_YEAR};

/// Error type for all fallible operations in the lunara-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year number falls outside the supported range.
    ///
    /// Years below 1 would produce negative epoch offsets; the upper
    /// bound matches the almanac's recorded era.
    #[error("year {year} out of range (must be {MIN_YEAR}..={MAX_YEAR})")]
    YearOutOfRange {
        /// The rejected year number.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_bounds() {
        let err = CalendarError::YearOutOfRange { year: 0 };
        assert_eq!(err.to_string(), "year 0 out of range (must be 1..=9999)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
