pub mod fastq;

use anyhow::Result;
use fastq::{FastqReader, FileReader};
use std::io::BufRead;
use std::path::Path;
use tracing::info;

/// Sequence file flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqFormat {
    Fasta,
    Fastq,
}

impl SeqFormat {
    /// Guess from the file name, ignoring a trailing `.gz`.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        let ext = name.rsplit_once('.')?.1;
        match ext {
            "fastq" | "fq" => Some(SeqFormat::Fastq),
            "fasta" | "fa" | "fna" | "fas" => Some(SeqFormat::Fasta),
            _ => None,
        }
    }

    /// Guess from the first byte of the (decompressed) content.
    fn from_first_byte(byte: Option<u8>) -> Option<Self> {
        match byte {
            Some(b'>') => Some(SeqFormat::Fasta),
            Some(b'@') => Some(SeqFormat::Fastq),
            _ => None,
        }
    }
}

/// Read every sequence from a FASTA/FASTQ file (gzip and `-` for stdin are
/// supported).
///
/// `fasta` forces the format; otherwise the extension decides, and failing
/// that the first byte of the content. An empty input yields no reads.
pub fn read_fragments(path: impl AsRef<Path>, fasta: Option<bool>) -> Result<Vec<Vec<u8>>> {
    let path = path.as_ref();
    let mut file = FileReader::open(path)?;

    let format = match fasta {
        Some(true) => SeqFormat::Fasta,
        Some(false) => SeqFormat::Fastq,
        None => match SeqFormat::from_extension(path) {
            Some(format) => format,
            None => {
                let first = file.fill_buf()?.iter().copied().find(|b| !b.is_ascii_whitespace());
                match SeqFormat::from_first_byte(first) {
                    Some(format) => format,
                    None if first.is_none() => return Ok(Vec::new()),
                    None => anyhow::bail!(
                        "Cannot tell whether {:?} is FASTA or FASTQ; pass the format explicitly",
                        path
                    ),
                }
            }
        },
    };

    let mut reader = FastqReader::new(file, format == SeqFormat::Fasta);
    let mut reads = Vec::new();
    while let Some(record) = reader.next()? {
        reads.push(record.sequence);
    }
    info!("Read {} sequences from {:?} ({:?})", reads.len(), path, format);
    Ok(reads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(SeqFormat::from_extension(Path::new("a/reads.fastq")), Some(SeqFormat::Fastq));
        assert_eq!(SeqFormat::from_extension(Path::new("reads.FQ.gz")), Some(SeqFormat::Fastq));
        assert_eq!(SeqFormat::from_extension(Path::new("genome.fa")), Some(SeqFormat::Fasta));
        assert_eq!(SeqFormat::from_extension(Path::new("genome.fasta.gz")), Some(SeqFormat::Fasta));
        assert_eq!(SeqFormat::from_extension(Path::new("reads.txt")), None);
        assert_eq!(SeqFormat::from_extension(Path::new("-")), None);
    }

    #[test]
    fn test_format_from_first_byte() {
        assert_eq!(SeqFormat::from_first_byte(Some(b'>')), Some(SeqFormat::Fasta));
        assert_eq!(SeqFormat::from_first_byte(Some(b'@')), Some(SeqFormat::Fastq));
        assert_eq!(SeqFormat::from_first_byte(Some(b'A')), None);
    }
}
