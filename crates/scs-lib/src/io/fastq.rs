use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// A single sequence record. FASTA records carry no quality line.
///
/// Fields are raw bytes: reads are only ever compared and concatenated, so
/// there is no reason to pay for UTF-8 validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub id: Vec<u8>,
    pub sequence: Vec<u8>,
    pub quality: Option<Vec<u8>>,
}

impl FastqRecord {
    pub fn new(id: Vec<u8>, sequence: Vec<u8>, quality: Option<Vec<u8>>) -> Self {
        Self { id, sequence, quality }
    }
}

/// Buffered FASTQ/FASTA reader with transparent gzip support
pub struct FastqReader<R: BufRead> {
    reader: R,
    is_fasta: bool,
    buffer: Vec<u8>,
    /// FASTA header already consumed while scanning the previous record
    pending_header: Option<Vec<u8>>,
}

// Either a plain file, gzipped file, or stdin
pub enum FileReader {
    Plain(BufReader<std::fs::File>),
    Gzipped(BufReader<GzDecoder<BufReader<std::fs::File>>>),
    Stdin(BufReader<std::io::Stdin>),
    StdinGzipped(BufReader<GzDecoder<BufReader<std::io::Stdin>>>),
}

impl Read for FileReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            FileReader::Plain(r) => r.read(buf),
            FileReader::Gzipped(r) => r.read(buf),
            FileReader::Stdin(r) => r.read(buf),
            FileReader::StdinGzipped(r) => r.read(buf),
        }
    }
}

impl BufRead for FileReader {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        match self {
            FileReader::Plain(r) => r.fill_buf(),
            FileReader::Gzipped(r) => r.fill_buf(),
            FileReader::Stdin(r) => r.fill_buf(),
            FileReader::StdinGzipped(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            FileReader::Plain(r) => r.consume(amt),
            FileReader::Gzipped(r) => r.consume(amt),
            FileReader::Stdin(r) => r.consume(amt),
            FileReader::StdinGzipped(r) => r.consume(amt),
        }
    }
}

fn is_gzip(peek: &[u8]) -> bool {
    peek.len() >= 2 && peek[0] == 0x1f && peek[1] == 0x8b
}

impl FileReader {
    /// Open a file (auto-detects gzip), or stdin if path is `-`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if crate::cli::is_stdio_path(path) {
            let mut buffered = BufReader::with_capacity(1024 * 1024, std::io::stdin());
            let gz = is_gzip(buffered.fill_buf()?);
            return Ok(if gz {
                FileReader::StdinGzipped(BufReader::new(GzDecoder::new(buffered)))
            } else {
                FileReader::Stdin(buffered)
            });
        }

        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open file: {:?}", path))?;
        let mut buffered = BufReader::with_capacity(1024 * 1024, file);
        let gz = is_gzip(buffered.fill_buf()?);
        Ok(if gz {
            FileReader::Gzipped(BufReader::new(GzDecoder::new(buffered)))
        } else {
            FileReader::Plain(buffered)
        })
    }
}

impl<R: BufRead> FastqReader<R> {
    pub fn new(reader: R, is_fasta: bool) -> Self {
        Self {
            reader,
            is_fasta,
            buffer: Vec::with_capacity(512),
            pending_header: None,
        }
    }

    #[inline]
    fn trim_newline(buf: &mut Vec<u8>) -> usize {
        while buf.last().is_some_and(|&b| b == b'\n' || b == b'\r') {
            buf.pop();
        }
        buf.len()
    }

    /// Read the next line into the buffer with the newline stripped.
    /// Returns false at EOF.
    fn next_line(&mut self) -> Result<bool> {
        self.buffer.clear();
        let n = self.reader.read_until(b'\n', &mut self.buffer)?;
        Self::trim_newline(&mut self.buffer);
        Ok(n > 0)
    }

    /// Next non-blank line, or false at EOF.
    fn next_nonblank_line(&mut self) -> Result<bool> {
        while self.next_line()? {
            if !self.buffer.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Read the next record
    pub fn next(&mut self) -> Result<Option<FastqRecord>> {
        if self.is_fasta {
            self.next_fasta()
        } else {
            self.next_fastq()
        }
    }

    fn next_fastq(&mut self) -> Result<Option<FastqRecord>> {
        if !self.next_nonblank_line()? {
            return Ok(None);
        }
        if self.buffer.first() != Some(&b'@') {
            anyhow::bail!(
                "Invalid FASTQ: expected '@' header line, got {:?}",
                String::from_utf8_lossy(&self.buffer)
            );
        }
        let id = self.buffer.clone();

        if !self.next_line().context("Invalid FASTQ: missing sequence line")? {
            anyhow::bail!("Invalid FASTQ: unexpected EOF at sequence line");
        }
        let sequence = self.buffer.clone();

        if !self.next_line().context("Invalid FASTQ: missing '+' line")? {
            anyhow::bail!("Invalid FASTQ: unexpected EOF at '+' separator line");
        }
        if self.buffer.first() != Some(&b'+') {
            anyhow::bail!(
                "Invalid FASTQ: expected '+' separator line, got {:?}",
                String::from_utf8_lossy(&self.buffer)
            );
        }

        if !self.next_line().context("Invalid FASTQ: missing quality line")? {
            anyhow::bail!("Invalid FASTQ: unexpected EOF at quality line");
        }
        let quality = self.buffer.clone();

        if quality.len() != sequence.len() {
            anyhow::bail!(
                "Invalid FASTQ: sequence length ({}) != quality length ({}) for read {}",
                sequence.len(),
                quality.len(),
                String::from_utf8_lossy(&id)
            );
        }

        Ok(Some(FastqRecord::new(id, sequence, Some(quality))))
    }

    /// FASTA records may wrap their sequence over several lines; everything
    /// up to the next '>' header belongs to the current record.
    fn next_fasta(&mut self) -> Result<Option<FastqRecord>> {
        let id = match self.pending_header.take() {
            Some(header) => header,
            None => {
                if !self.next_nonblank_line()? {
                    return Ok(None);
                }
                if self.buffer.first() != Some(&b'>') {
                    anyhow::bail!(
                        "Invalid FASTA: expected '>' header line, got {:?}",
                        String::from_utf8_lossy(&self.buffer)
                    );
                }
                self.buffer.clone()
            }
        };

        let mut sequence = Vec::new();
        while self.next_line()? {
            if self.buffer.first() == Some(&b'>') {
                self.pending_header = Some(self.buffer.clone());
                break;
            }
            sequence.extend_from_slice(&self.buffer);
        }

        Ok(Some(FastqRecord::new(id, sequence, None)))
    }
}
