//! Error types for invariant checking.
//!
//! Lookups and removals never fail: a missing element is reported through
//! `Option` or a `bool`, and removing an absent element is a no-op. The only
//! real errors are invariant violations detected by
//! [`OrderedSequence::check`](crate::OrderedSequence::check).

use thiserror::Error;

/// An invariant violation found by
/// [`OrderedSequence::check`](crate::OrderedSequence::check).
///
/// `Unsorted` cannot be produced through the public mutators while the
/// ordering is deterministic; seeing it means a comparison or a key changed
/// while the element was stored. `Duplicates` is reachable, since insertion
/// accepts elements whose order key is already present.
///
/// # Examples
///
/// ```rust
/// use sorted_bags::{CheckError, RawSequence};
///
/// let mut sequence = RawSequence::new();
/// sequence.insert(1);
/// sequence.insert(1);
/// assert_eq!(sequence.check(), Err(CheckError::Duplicates));
/// assert_eq!(CheckError::Duplicates.to_string(), "duplicates");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CheckError {
    /// Two elements appear out of order.
    #[error("unsorted")]
    Unsorted,
    /// Two adjacent elements share the same order key.
    #[error("duplicates")]
    Duplicates,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CheckError::Unsorted, "unsorted")]
    #[case(CheckError::Duplicates, "duplicates")]
    fn test_check_error_display(#[case] error: CheckError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_check_error_is_std_error() {
        let error: Box<dyn std::error::Error + Send + Sync> = Box::new(CheckError::Unsorted);
        assert_eq!(error.to_string(), "unsorted");
    }
}
