//! DNA → RNA → protein lookups applied to an assembled sequence.

use anyhow::{bail, Result};

/// Stop marker in [`codon_to_amino`].
const STOP: u8 = b'*';

/// Transcribe DNA into RNA.
///
/// Returns `(complementary strand, same strand)`: the first pairs every base
/// (A→U, T→A, C→G, G→C), the second only replaces T with U.
pub fn transcribe(dna: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut complement = Vec::with_capacity(dna.len());
    let mut same = Vec::with_capacity(dna.len());
    for (pos, &base) in dna.iter().enumerate() {
        let (c, s) = match base {
            b'A' => (b'U', b'A'),
            b'T' => (b'A', b'U'),
            b'C' => (b'G', b'C'),
            b'G' => (b'C', b'G'),
            other => bail!("Invalid DNA base {:?} at position {}", other as char, pos),
        };
        complement.push(c);
        same.push(s);
    }
    Ok((complement, same))
}

/// Standard genetic code; `*` marks a stop codon.
fn codon_to_amino(codon: &[u8]) -> Option<u8> {
    let amino = match codon {
        b"UUU" | b"UUC" => b'F',
        b"UUA" | b"UUG" | b"CUU" | b"CUC" | b"CUA" | b"CUG" => b'L',
        b"AUU" | b"AUC" | b"AUA" => b'I',
        b"AUG" => b'M',
        b"GUU" | b"GUC" | b"GUA" | b"GUG" => b'V',
        b"UCU" | b"UCC" | b"UCA" | b"UCG" | b"AGU" | b"AGC" => b'S',
        b"CCU" | b"CCC" | b"CCA" | b"CCG" => b'P',
        b"ACU" | b"ACC" | b"ACA" | b"ACG" => b'T',
        b"GCU" | b"GCC" | b"GCA" | b"GCG" => b'A',
        b"UAU" | b"UAC" => b'Y',
        b"UAA" | b"UAG" | b"UGA" => STOP,
        b"CAU" | b"CAC" => b'H',
        b"CAA" | b"CAG" => b'Q',
        b"AAU" | b"AAC" => b'N',
        b"AAA" | b"AAG" => b'K',
        b"GAU" | b"GAC" => b'D',
        b"GAA" | b"GAG" => b'E',
        b"UGU" | b"UGC" => b'C',
        b"UGG" => b'W',
        b"CGU" | b"CGC" | b"CGA" | b"CGG" | b"AGA" | b"AGG" => b'R',
        b"GGU" | b"GGC" | b"GGA" | b"GGG" => b'G',
        _ => return None,
    };
    Some(amino)
}

/// Translate every open reading frame of an mRNA.
///
/// Each `AUG` (overlapping occurrences included) starts a frame that runs
/// until a stop codon or the last complete codon. The leading methionine is
/// dropped, so a start immediately followed by a stop yields an empty
/// protein.
pub fn translate(mrna: &[u8]) -> Result<Vec<String>> {
    let mut proteins = Vec::new();
    for start in (0..mrna.len().saturating_sub(2)).filter(|&i| &mrna[i..i + 3] == b"AUG") {
        let mut protein = String::new();
        for codon in mrna[start..].chunks_exact(3) {
            let Some(amino) = codon_to_amino(codon) else {
                bail!(
                    "Invalid codon {:?} in frame starting at {}",
                    String::from_utf8_lossy(codon),
                    start
                );
            };
            if amino == STOP {
                break;
            }
            protein.push(amino as char);
        }
        proteins.push(protein.chars().skip(1).collect());
    }
    Ok(proteins)
}
