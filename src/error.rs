use std::error::Error;
use std::fmt;

/// Error returned when an initial set of associations is not one-to-one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectiveMapError {
    /// A mapping with `pairs` entries only has `distinct_ranges` distinct values.
    NonInjective { pairs: usize, distinct_ranges: usize },
    /// The pair at `position` repeats a domain value seen earlier in the sequence.
    DuplicateDomain { position: usize },
    /// The pair at `position` repeats a range value seen earlier in the sequence.
    DuplicateRange { position: usize },
}

impl fmt::Display for InjectiveMapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InjectiveMapError::NonInjective {
                pairs,
                distinct_ranges,
            } => write!(
                f,
                "Mapping is not injective: {} entries share {} distinct values",
                pairs, distinct_ranges
            ),
            InjectiveMapError::DuplicateDomain { position } => {
                write!(f, "Pair {} repeats an earlier domain value", position)
            }
            InjectiveMapError::DuplicateRange { position } => {
                write!(f, "Pair {} repeats an earlier range value", position)
            }
        }
    }
}

impl Error for InjectiveMapError {}
