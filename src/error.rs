use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type for job-record queries
// ---------------------------------------------------------------------------

/// Why a record's salary range failed validation.
///
/// Callers see one [`InsightsError::InvalidRange`] kind either way; the
/// defect is carried along for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDefect {
    /// `min_salary` or `max_salary` is not present on the record.
    MissingField,
    /// A bound is present but is not an integer.
    NotNumeric,
    /// Both bounds parse but `max_salary` is below `min_salary`.
    Inverted,
}

impl fmt::Display for RangeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RangeDefect::MissingField => "missing salary field",
            RangeDefect::NotNumeric => "non-numeric salary value",
            RangeDefect::Inverted => "max_salary below min_salary",
        };
        f.write_str(reason)
    }
}

/// Error type for queries over a job-record collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightsError {
    /// The record's salary-range fields do not form a usable interval.
    #[error("invalid salary range: {reason}")]
    InvalidRange { reason: RangeDefect },
    /// Extremes scan found no record with a parseable value for `field`.
    #[error("no record carries a parseable '{field}' value")]
    NoValidData { field: String },
    /// A queried field is absent from a record.
    #[error("record has no '{field}' field")]
    MissingField { field: String },
}

impl InsightsError {
    pub(crate) fn invalid_range(reason: RangeDefect) -> Self {
        InsightsError::InvalidRange { reason }
    }
}
