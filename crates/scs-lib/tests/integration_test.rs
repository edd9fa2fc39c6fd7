use scs_lib::cli::{AssembleConfig, Workers};
use scs_lib::pipeline::{assemble_file, candidate_proteins, AssemblyReport};
use scs_lib::Algorithm;
use std::fs;
use tempfile::TempDir;

/// Overlapping reads of "ABCDEFGHIJKL" with one duplicate.
const CHAIN_FASTQ: &str = "\
@r1\nGHIJKL\n+\nIIIIII\n\
@r2\nABCDEF\n+\nIIIIII\n\
@r3\nBCDEFG\n+\nIIIIII\n\
@r4\nCDEFGH\n+\nIIIIII\n\
@r5\nCDEFGH\n+\nIIIIII\n\
@r6\nDEFGHI\n+\nIIIIII\n";

const CHAIN_FASTA: &str = ">r1\nGHI\nJKL\n>r2\nABCDEF\n>r3\nBCDEFG\n>r4\nCDEFGH\n>r5\nDEFGHI\n";

/// Write `content` to `name` in a fresh temp dir and run the pipeline on it.
fn run(
    name: &str,
    content: &str,
    config_fn: impl FnOnce(&mut AssembleConfig),
) -> (TempDir, AssemblyReport) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join(name);
    fs::write(&input, content).unwrap();

    let mut config = AssembleConfig {
        input,
        ..AssembleConfig::default()
    };
    config_fn(&mut config);
    let report = assemble_file(&config).unwrap();
    (temp_dir, report)
}

#[test]
fn test_fastq_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let (_dir, report) = run("reads.fastq", CHAIN_FASTQ, |c| c.algorithm = algorithm);
        assert_eq!(report.sequence, b"ABCDEFGHIJKL".to_vec(), "{}", algorithm);
        assert_eq!(report.input_reads, 6);
        assert_eq!(report.distinct_reads, 5);
        assert_eq!(report.algorithm, algorithm);
    }
}

#[test]
fn test_multiline_fasta() {
    let (_dir, report) = run("reads.fa", CHAIN_FASTA, |c| c.algorithm = Algorithm::GreedyDict);
    assert_eq!(report.sequence, b"ABCDEFGHIJKL".to_vec());
    assert_eq!(report.distinct_reads, 5);
}

#[test]
fn test_format_detected_from_content() {
    let (_dir, report) = run("reads.txt", CHAIN_FASTA, |c| c.algorithm = Algorithm::GreedyMatrix);
    assert_eq!(report.sequence, b"ABCDEFGHIJKL".to_vec());
}

#[test]
fn test_forced_format_overrides_extension() {
    let (_dir, report) = run("reads.fastq", CHAIN_FASTA, |c| c.fasta = Some(true));
    assert_eq!(report.sequence, b"ABCDEFGHIJKL".to_vec());
}

#[test]
fn test_parallel_workers_and_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("reads.fastq");
    let output = temp_dir.path().join("assembly.txt");
    fs::write(&input, CHAIN_FASTQ).unwrap();

    let config = AssembleConfig {
        input,
        output: Some(output.clone()),
        algorithm: Algorithm::GreedyHeap,
        workers: Workers::Fixed(4),
        ..AssembleConfig::default()
    };
    let report = assemble_file(&config).unwrap();
    assert_eq!(report.sequence, b"ABCDEFGHIJKL".to_vec());
    assert_eq!(fs::read_to_string(&output).unwrap(), "ABCDEFGHIJKL\n");
}

#[test]
fn test_gzipped_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("reads.fastq.gz");
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(CHAIN_FASTQ.as_bytes()).unwrap();
    fs::write(&input, encoder.finish().unwrap()).unwrap();

    let config = AssembleConfig {
        input,
        algorithm: Algorithm::Exact,
        ..AssembleConfig::default()
    };
    assert_eq!(assemble_file(&config).unwrap().sequence, b"ABCDEFGHIJKL".to_vec());
}

#[test]
fn test_empty_input_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("empty.fastq");
    fs::write(&input, "").unwrap();
    let config = AssembleConfig {
        input,
        ..AssembleConfig::default()
    };
    let err = assemble_file(&config).unwrap_err();
    assert!(format!("{:#}", err).contains("no reads to assemble"));
}

#[test]
fn test_missing_file_is_an_error() {
    let config = AssembleConfig {
        input: "/nonexistent/reads.fastq".into(),
        ..AssembleConfig::default()
    };
    assert!(assemble_file(&config).is_err());
}

#[test]
fn test_dna_reads_to_proteins() {
    // ATG, 21 distinct codons, TAA: one 21-residue protein on the same strand.
    let orf = "ATGGCTCGTAATGATTGTCAAGAAGGTCATATTCTTAAATTTCCTTCTACTTGGTATGTTGCCGACTAA";
    let fasta = format!(">a\n{}\n>b\n{}\n", &orf[..40], &orf[30..]);
    let (_dir, report) = run("orf.fa", &fasta, |c| c.algorithm = Algorithm::GreedyHeap);
    assert_eq!(report.sequence, orf.as_bytes().to_vec());

    let proteins = candidate_proteins(&report.sequence, 20).unwrap();
    assert_eq!(proteins, vec!["ARNDCQEGHILKFPSTWYVAD".to_string()]);
}
