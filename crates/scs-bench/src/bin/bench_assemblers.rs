//! Timing benchmark: every assembler on the same read file.
//! The exact solver only runs on small inputs (it is factorial).

use scs_lib::assembly::dedup_reads;
use scs_lib::{assemble, Algorithm, Workers};
use std::time::Instant;

const EXACT_MAX_READS: usize = 9;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/reads.fastq".to_string());
    let workers: i64 = std::env::args()
        .nth(2)
        .map(|w| w.parse().expect("worker count must be an integer"))
        .unwrap_or(-1);
    let workers = Workers::from_count(workers).expect("invalid worker count");

    eprintln!("Reading: {}", path);
    let reads = scs_lib::io::read_fragments(&path, None).expect("Cannot read input file");
    let distinct = dedup_reads(&reads).expect("Input has no reads").len();
    let total_bases: usize = reads.iter().map(|r| r.len()).sum();
    eprintln!(
        "Loaded {} reads ({} distinct), {} bases\n",
        reads.len(),
        distinct,
        total_bases
    );

    println!("{:<16} {:>12} {:>12}", "Algorithm", "Length", "Time");
    println!("{}", "-".repeat(42));

    for algorithm in Algorithm::ALL {
        if algorithm == Algorithm::Exact && distinct > EXACT_MAX_READS {
            println!("{:<16} {:>12} {:>12}", algorithm, "skipped", "-");
            continue;
        }
        let t = Instant::now();
        let result = assemble(&reads, algorithm, workers).expect("assembly failed");
        let elapsed = t.elapsed();
        println!(
            "{:<16} {:>10} bp {:>10.1}ms",
            algorithm,
            result.len(),
            elapsed.as_secs_f64() * 1000.0
        );
    }

    println!("{}", "-".repeat(42));
    println!("Input: {} reads, {} bases, workers={:?}", reads.len(), total_bases, workers);
}
