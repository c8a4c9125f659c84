use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{InsightsError, RangeDefect};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Employment category, e.g. `"FULL_TIME"`.
pub const JOB_TYPE: &str = "job_type";
/// Industry name; the empty string means "unspecified".
pub const INDUSTRY: &str = "industry";
/// Lower salary bound; a bare digit run when well-formed.
pub const MIN_SALARY: &str = "min_salary";
/// Upper salary bound; same format as [`MIN_SALARY`].
pub const MAX_SALARY: &str = "max_salary";

// ---------------------------------------------------------------------------
// Record – one job listing
// ---------------------------------------------------------------------------

/// A single job listing: field name → raw string value, exactly as the
/// source feed delivered it. Salary fields stay text until a query
/// validates them; the feed frequently ships them blank or non-numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Raw value stored under `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// The record's validated salary interval, or the defect that prevents
    /// validation. All defects surface as the one
    /// [`InsightsError::InvalidRange`] kind.
    pub fn salary_bounds(&self) -> Result<SalaryBounds, InsightsError> {
        let min = self.salary_field(MIN_SALARY)?;
        let max = self.salary_field(MAX_SALARY)?;
        if max < min {
            return Err(InsightsError::invalid_range(RangeDefect::Inverted));
        }
        Ok(SalaryBounds { min, max })
    }

    /// One bound as a signed integer. Wider than [`parse_salary`] on
    /// purpose: the validator tolerates padding and signs the way the feed's
    /// manual corrections sometimes arrive.
    fn salary_field(&self, field: &str) -> Result<i64, InsightsError> {
        let raw = self
            .get(field)
            .ok_or(InsightsError::invalid_range(RangeDefect::MissingField))?;
        raw.trim()
            .parse()
            .map_err(|_| InsightsError::invalid_range(RangeDefect::NotNumeric))
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Salary parsing
// ---------------------------------------------------------------------------

/// Parse a salary cell as the feed writes well-formed ones: a bare,
/// non-empty run of ASCII digits. Signs, padding, and decimals are
/// rejected; values overflowing `i64` are treated as unparseable.
pub fn parse_salary(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

// ---------------------------------------------------------------------------
// SalaryBounds – a validated inclusive interval
// ---------------------------------------------------------------------------

/// A validated salary interval; `min <= max` holds by construction, so a
/// value of this type always denotes a non-empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBounds {
    pub min: i64,
    pub max: i64,
}

impl SalaryBounds {
    /// Whether `salary` falls inside the interval, both ends inclusive.
    pub fn contains(self, salary: i64) -> bool {
        self.min <= salary && salary <= self.max
    }
}
