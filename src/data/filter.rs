use std::collections::BTreeSet;

use super::model::{Record, INDUSTRY, JOB_TYPE};
use crate::error::InsightsError;

// ---------------------------------------------------------------------------
// Unique-value extraction
// ---------------------------------------------------------------------------

/// Collect the distinct values stored under `field` across all records.
///
/// With `exclude_empty` set, the empty string (the feed's "unspecified"
/// marker) is left out of the result. A record lacking `field` entirely is
/// a caller-data-contract violation and fails the whole call with
/// [`InsightsError::MissingField`].
pub fn unique_values(
    records: &[Record],
    field: &str,
    exclude_empty: bool,
) -> Result<BTreeSet<String>, InsightsError> {
    let mut values = BTreeSet::new();
    for record in records {
        let value = record.get(field).ok_or_else(|| InsightsError::MissingField {
            field: field.to_string(),
        })?;
        if exclude_empty && value.is_empty() {
            continue;
        }
        values.insert(value.to_string());
    }
    Ok(values)
}

/// Every distinct `job_type` in the collection.
pub fn unique_job_types(records: &[Record]) -> Result<BTreeSet<String>, InsightsError> {
    unique_values(records, JOB_TYPE, false)
}

/// Every distinct named `industry`; unspecified (empty) entries dropped.
pub fn unique_industries(records: &[Record]) -> Result<BTreeSet<String>, InsightsError> {
    unique_values(records, INDUSTRY, true)
}

// ---------------------------------------------------------------------------
// Exact-match filter
// ---------------------------------------------------------------------------

/// Records whose `field` equals `value` exactly, in input order.
///
/// Plain string equality, no coercion or substring matching. Records
/// lacking the field simply don't match; no match yields an empty vec.
pub fn filter_by_field<'a>(records: &'a [Record], field: &str, value: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| record.get(field) == Some(value))
        .collect()
}

pub fn filter_by_job_type<'a>(records: &'a [Record], job_type: &str) -> Vec<&'a Record> {
    filter_by_field(records, JOB_TYPE, job_type)
}

pub fn filter_by_industry<'a>(records: &'a [Record], industry: &str) -> Vec<&'a Record> {
    filter_by_field(records, INDUSTRY, industry)
}
