use crate::assembly::{assemble, dedup_reads, Algorithm};
use crate::cli::AssembleConfig;
use crate::io::read_fragments;
use crate::translation::{transcribe, translate};
use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tracing::info;

/// Outcome of one file-to-superstring run.
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub algorithm: Algorithm,
    /// Reads found in the input, duplicates included
    pub input_reads: usize,
    pub distinct_reads: usize,
    pub elapsed: Duration,
    pub sequence: Vec<u8>,
}

/// Read fragments from `config.input`, assemble them, and write the result to
/// `config.output` (one newline-terminated line) when set.
pub fn assemble_file(config: &AssembleConfig) -> Result<AssemblyReport> {
    let reads = read_fragments(&config.input, config.fasta)?;
    let distinct_reads = dedup_reads(&reads)
        .map(|d| d.len())
        .with_context(|| format!("No reads found in {:?}", config.input))?;

    info!(
        "Assembling {} reads ({} distinct) with {}",
        reads.len(),
        distinct_reads,
        config.algorithm
    );
    let start = Instant::now();
    let sequence = assemble(&reads, config.algorithm, config.workers)?;
    let elapsed = start.elapsed();
    info!(
        "Assembled {} bp in {:.3}s",
        sequence.len(),
        elapsed.as_secs_f64()
    );

    if let Some(output) = &config.output {
        let mut line = sequence.clone();
        line.push(b'\n');
        std::fs::write(output, line)
            .with_context(|| format!("Failed to write assembly to {:?}", output))?;
        info!("Wrote assembly to {:?}", output);
    }

    Ok(AssemblyReport {
        algorithm: config.algorithm,
        input_reads: reads.len(),
        distinct_reads,
        elapsed,
        sequence,
    })
}

/// Proteins of at least `min_len` amino acids found on either RNA strand of
/// the assembled DNA, complementary strand first.
pub fn candidate_proteins(dna: &[u8], min_len: usize) -> Result<Vec<String>> {
    let (complement, same) = transcribe(dna).context("Assembled sequence is not plain DNA")?;
    let mut proteins = Vec::new();
    for rna in [complement, same] {
        proteins.extend(translate(&rna)?.into_iter().filter(|p| p.len() >= min_len));
    }
    info!("{} candidate proteins with >= {} amino acids", proteins.len(), min_len);
    Ok(proteins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_proteins_filters_short() {
        // Same strand: ATG + 3 codons + stop -> "AAA" after dropping M.
        let dna = b"ATGGCTGCAGCCTAA";
        assert_eq!(candidate_proteins(dna, 3).unwrap(), vec!["AAA".to_string()]);
        assert!(candidate_proteins(dna, 4).unwrap().is_empty());
    }

    #[test]
    fn test_candidate_proteins_rejects_non_dna() {
        assert!(candidate_proteins(b"ACGU", 1).is_err());
    }
}
