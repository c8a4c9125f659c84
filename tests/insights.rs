use std::fs;
use std::path::PathBuf;

use job_insights::data::model::{INDUSTRY, JOB_TYPE, MAX_SALARY, MIN_SALARY};
use job_insights::{
    filter_by_industry, filter_by_job_type, filter_by_salary_range, filter_by_salary_range_with,
    get_max_salary, get_min_salary, read, unique_industries, unique_job_types, Record,
};

fn job(job_type: &str, industry: &str, min: &str, max: &str) -> Record {
    let mut record = Record::new();
    record.insert(JOB_TYPE, job_type);
    record.insert(INDUSTRY, industry);
    record.insert(MIN_SALARY, min);
    record.insert(MAX_SALARY, max);
    record
}

/// A mixed-quality feed: well-formed rows interleaved with the defects the
/// real feed ships (blank salaries, free text, inverted bounds).
fn sample_feed() -> Vec<Record> {
    vec![
        job("FULL_TIME", "Finance", "50000", "80000"),
        job("PART_TIME", "", "15000", "30000"),
        job("FULL_TIME", "Health", "60000", "90000"),
        job("CONTRACTOR", "Finance", "", "70000"),
        job("FULL_TIME", "Retail", "negotiable", "55000"),
        job("PART_TIME", "Health", "90000", "20000"),
        job("CONTRACTOR", "Software", "40000", "65000"),
    ]
}

fn write_temp_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("job_insights_{}_{name}", std::process::id()));
    fs::write(&path, contents).expect("writing temp CSV");
    path
}

#[test]
fn csv_feed_loads_and_answers_every_query() {
    let csv = "\
job_type,industry,min_salary,max_salary
FULL_TIME,Finance,50000,80000
PART_TIME,,15000,30000
FULL_TIME,Health,60000,90000
CONTRACTOR,Finance,,70000
";
    let path = write_temp_csv("feed.csv", csv);
    let records = read(&path).expect("loading CSV feed");
    fs::remove_file(&path).ok();

    assert_eq!(records.len(), 4);

    let types = unique_job_types(&records).unwrap();
    assert_eq!(
        types.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["CONTRACTOR", "FULL_TIME", "PART_TIME"]
    );

    let industries = unique_industries(&records).unwrap();
    assert_eq!(
        industries.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["Finance", "Health"]
    );

    assert_eq!(filter_by_job_type(&records, "FULL_TIME").len(), 2);
    assert_eq!(get_max_salary(&records), Ok(90000));
    assert_eq!(get_min_salary(&records), Ok(15000));

    // The record with a blank min_salary is invalid for range queries but
    // still visible to everything else.
    assert_eq!(filter_by_salary_range(&records, 65000).len(), 2);
}

#[test]
fn exact_match_filter_returns_an_ordered_subset() {
    let records = sample_feed();
    let hits = filter_by_industry(&records, "Finance");

    assert!(hits.len() <= records.len());
    assert!(hits.iter().all(|r| r.get(INDUSTRY) == Some("Finance")));

    // Relative order is the feed's insertion order.
    let positions: Vec<usize> = hits
        .iter()
        .map(|hit| records.iter().position(|r| std::ptr::eq(r, *hit)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn range_filter_equals_selection_over_the_valid_subset() {
    let records = sample_feed();
    let salary = 62000;

    let expected: Vec<&Record> = records
        .iter()
        .filter(|r| {
            r.salary_bounds()
                .map(|bounds| bounds.contains(salary))
                .unwrap_or(false)
        })
        .collect();

    assert_eq!(filter_by_salary_range(&records, salary), expected);
}

#[test]
fn range_filter_reports_exactly_the_malformed_records() {
    let records = sample_feed();
    let mut skipped = 0;
    filter_by_salary_range_with(&records, 62000, |_, _, _| skipped += 1);
    // Blank min, free-text min, inverted bounds.
    assert_eq!(skipped, 3);
}

#[test]
fn queries_are_idempotent_over_an_unmodified_feed() {
    let records = sample_feed();

    let first = filter_by_salary_range(&records, 62000);
    let second = filter_by_salary_range(&records, 62000);
    assert_eq!(first, second);

    assert_eq!(
        filter_by_job_type(&records, "FULL_TIME"),
        filter_by_job_type(&records, "FULL_TIME")
    );
    assert_eq!(get_max_salary(&records), get_max_salary(&records));
}

#[test]
fn extremes_tolerate_malformed_rows_but_not_a_fully_malformed_feed() {
    let records = sample_feed();
    assert_eq!(get_max_salary(&records), Ok(90000));
    assert_eq!(get_min_salary(&records), Ok(15000));

    let junk = vec![job("FULL_TIME", "", "x", "y")];
    assert!(get_max_salary(&junk).is_err());
}
