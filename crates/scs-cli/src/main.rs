use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use scs_lib::cli::{AssembleConfig, Workers, DEFAULT_MIN_PROTEIN_LEN};
use scs_lib::{pipeline, translation, Algorithm};

#[derive(Parser)]
#[command(name = "scs")]
#[command(author = "SCS Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Shortest common superstring assembly of sequence reads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble reads into one superstring
    Assemble(AssembleArgs),
    /// Transcribe DNA into RNA (complementary and same strand)
    Transcribe(TranscribeArgs),
    /// Translate mRNA into proteins, one per start codon
    Translate(TranslateArgs),
    /// Assemble reads, then list candidate proteins of the result
    Run(RunArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Input FASTA/FASTQ file, optionally gzipped (`-` for stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    input: PathBuf,

    /// Assembly algorithm: exact, greedy-dict, greedy-heap, greedy-matrix
    #[arg(short, long, default_value = "greedy-heap")]
    algorithm: String,

    /// Workers for the initial overlap computation (1 = sequential, -1 = all cores)
    #[arg(short = 't', long, default_value_t = 1, allow_negative_numbers = true)]
    workers: i64,

    /// Parse input as FASTA regardless of extension
    #[arg(long, conflicts_with = "fastq")]
    fasta: bool,

    /// Parse input as FASTQ regardless of extension
    #[arg(long)]
    fastq: bool,
}

#[derive(Args)]
struct AssembleArgs {
    #[command(flatten)]
    source: InputArgs,

    /// Write the assembled sequence here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    source: InputArgs,

    /// Minimum protein length (amino acids) to report
    #[arg(long, default_value_t = DEFAULT_MIN_PROTEIN_LEN)]
    min_protein_len: usize,
}

#[derive(Args)]
struct TranscribeArgs {
    /// DNA sequence
    #[arg(short = 'd', long, required = true)]
    input_dna: String,

    /// Output file for the complementary RNA strand
    #[arg(short, long, default_value = "transcribed_dna_output.txt")]
    output: PathBuf,
}

#[derive(Args)]
struct TranslateArgs {
    /// mRNA sequence
    #[arg(short = 'm', long, required = true)]
    input_mrna: String,

    /// Output file, one protein per line
    #[arg(short, long, default_value = "translated_mrna_output.txt")]
    output: PathBuf,
}

impl InputArgs {
    fn into_config(self) -> Result<AssembleConfig> {
        let fasta = match (self.fasta, self.fastq) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Ok(AssembleConfig {
            input: self.input,
            algorithm: self.algorithm.parse::<Algorithm>()?,
            workers: Workers::from_count(self.workers)?,
            fasta,
            ..AssembleConfig::default()
        })
    }
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut out = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {:?}", path))?;
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if std::env::var("SCS_NO_BANNER").is_err() {
        eprintln!("SCS v{} - superstring read assembly", env!("CARGO_PKG_VERSION"));
        eprintln!();
    }

    match cli.command {
        Commands::Assemble(args) => {
            let mut config = args.source.into_config()?;
            config.output = args.output;
            let report = pipeline::assemble_file(&config)?;
            if config.output.is_none() {
                println!("{}", String::from_utf8_lossy(&report.sequence));
            }
            info!(
                "{}: {} reads ({} distinct) -> {} bp",
                report.algorithm,
                report.input_reads,
                report.distinct_reads,
                report.sequence.len()
            );
        }
        Commands::Transcribe(args) => {
            let (complement, same) = translation::transcribe(args.input_dna.as_bytes())?;
            let complement = String::from_utf8_lossy(&complement).into_owned();
            println!("{}", complement);
            info!("Same-strand RNA: {}", String::from_utf8_lossy(&same));
            write_lines(&args.output, &[complement])?;
        }
        Commands::Translate(args) => {
            let proteins = translation::translate(args.input_mrna.as_bytes())?;
            for protein in &proteins {
                println!("{}", protein);
            }
            write_lines(&args.output, &proteins)?;
        }
        Commands::Run(args) => {
            let config = AssembleConfig {
                min_protein_len: args.min_protein_len,
                ..args.source.into_config()?
            };
            let report = pipeline::assemble_file(&config)?;
            let proteins = pipeline::candidate_proteins(&report.sequence, config.min_protein_len)?;
            println!("Found {} candidate proteins", proteins.len());
            for protein in &proteins {
                println!("{}", protein);
            }
        }
    }

    Ok(())
}
