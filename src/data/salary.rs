use log::debug;

use super::model::{parse_salary, Record, MAX_SALARY, MIN_SALARY};
use crate::error::InsightsError;

// ---------------------------------------------------------------------------
// Single-record validation
// ---------------------------------------------------------------------------

/// Whether `salary` falls inside the record's salary range, both ends
/// inclusive.
///
/// Fails with [`InsightsError::InvalidRange`] when either bound is missing,
/// is not an integer, or the bounds are inverted. Errors are surfaced to
/// the immediate caller; only the bulk [`filter_by_salary_range`] converts
/// them to exclusion.
pub fn matches_salary_range(record: &Record, salary: i64) -> Result<bool, InsightsError> {
    Ok(record.salary_bounds()?.contains(salary))
}

// ---------------------------------------------------------------------------
// Bulk range filter
// ---------------------------------------------------------------------------

/// Records whose salary range contains `salary`, in input order.
///
/// Records failing range validation are dropped, never re-raised: partial
/// data-quality issues must not abort a bulk query. Each skip is reported
/// at debug level.
pub fn filter_by_salary_range<'a>(records: &'a [Record], salary: i64) -> Vec<&'a Record> {
    filter_by_salary_range_with(records, salary, |index, _, err| {
        debug!("skipping record {index}: {err}");
    })
}

/// Like [`filter_by_salary_range`], reporting each skipped record to
/// `on_invalid` together with its input position.
pub fn filter_by_salary_range_with<'a, F>(
    records: &'a [Record],
    salary: i64,
    mut on_invalid: F,
) -> Vec<&'a Record>
where
    F: FnMut(usize, &Record, &InsightsError),
{
    let mut matches = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match matches_salary_range(record, salary) {
            Ok(true) => matches.push(record),
            Ok(false) => {}
            Err(err) => on_invalid(index, record, &err),
        }
    }
    matches
}

// ---------------------------------------------------------------------------
// Extremes scan
// ---------------------------------------------------------------------------

/// Largest `max_salary` across the collection, ignoring unparseable values.
pub fn get_max_salary(records: &[Record]) -> Result<i64, InsightsError> {
    fold_extremum(records, MAX_SALARY, i64::max)
}

/// Smallest `min_salary` across the collection, ignoring unparseable values.
pub fn get_min_salary(records: &[Record]) -> Result<i64, InsightsError> {
    fold_extremum(records, MIN_SALARY, i64::min)
}

/// Extremum fold over one salary field. The accumulator stays empty until
/// the first parseable value, then every later parseable value folds in;
/// an entirely unparseable collection is [`InsightsError::NoValidData`].
fn fold_extremum(
    records: &[Record],
    field: &str,
    pick: fn(i64, i64) -> i64,
) -> Result<i64, InsightsError> {
    let mut acc: Option<i64> = None;
    for record in records {
        let Some(value) = record.get(field).and_then(parse_salary) else {
            continue;
        };
        acc = Some(match acc {
            Some(current) => pick(current, value),
            None => value,
        });
    }
    acc.ok_or_else(|| InsightsError::NoValidData {
        field: field.to_string(),
    })
}
