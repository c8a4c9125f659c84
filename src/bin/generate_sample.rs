use job_insights::data::model::{Record, INDUSTRY, JOB_TYPE, MAX_SALARY, MIN_SALARY};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    /// True roughly `percent` times out of 100.
    fn chance(&mut self, percent: u64) -> bool {
        self.below(100) < percent
    }
}

fn make_record(job_type: &str, industry: &str, min_salary: &str, max_salary: &str) -> Record {
    let mut record = Record::new();
    record.insert(JOB_TYPE, job_type);
    record.insert(INDUSTRY, industry);
    record.insert(MIN_SALARY, min_salary);
    record.insert(MAX_SALARY, max_salary);
    record
}

fn main() {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    // (job_type, base salary) – bands roughly matching the real feed.
    let job_types = [
        ("FULL_TIME", 60_000u64),
        ("PART_TIME", 20_000),
        ("CONTRACTOR", 45_000),
        ("TEMPORARY", 15_000),
    ];
    let industries = ["Finance", "Health", "Retail", "Software", "Logistics"];

    let mut records = Vec::new();
    for &(job_type, base) in &job_types {
        for _ in 0..15 {
            // Some listings leave the industry unspecified.
            let industry = if rng.chance(20) {
                ""
            } else {
                industries[rng.below(industries.len() as u64) as usize]
            };

            let min = base + rng.below(20) * 1_000;
            let max = min + 5_000 + rng.below(30) * 1_000;
            let mut min_text = min.to_string();
            let mut max_text = max.to_string();

            // Seed the usual feed defects so range queries have something
            // to tolerate: blank cells, free text, inverted bounds.
            if rng.chance(5) {
                min_text = String::new();
            } else if rng.chance(5) {
                max_text = "negotiable".to_string();
            } else if rng.chance(3) {
                std::mem::swap(&mut min_text, &mut max_text);
            }

            records.push(make_record(job_type, industry, &min_text, &max_text));
        }
    }

    // CSV
    let csv_path = "sample_jobs.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    writer
        .write_record([JOB_TYPE, INDUSTRY, MIN_SALARY, MAX_SALARY])
        .expect("Failed to write CSV header");
    for record in &records {
        let row: Vec<&str> = [JOB_TYPE, INDUSTRY, MIN_SALARY, MAX_SALARY]
            .iter()
            .map(|field| record.get(field).unwrap_or(""))
            .collect();
        writer.write_record(&row).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");

    // JSON (same rows, records-oriented)
    let json_path = "sample_jobs.json";
    let json = serde_json::to_string_pretty(&records).expect("Failed to serialize JSON");
    std::fs::write(json_path, json).expect("Failed to write JSON file");

    println!(
        "Wrote {} job records to {csv_path} and {json_path}",
        records.len()
    );
}
