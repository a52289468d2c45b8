//! Candidate enumeration: forward prefixes and reverse-complement suffixes.
//!
//! For each amplicon, one forward and one reverse candidate is generated for
//! every length in 19..=26, tagged with `option_group_index` 1..=8 in length
//! order. Generation is a deterministic, pure function of its input.

use crate::error::DesignError;
use crate::primer::{Direction, PrimerCandidate};

/// Shortest candidate length evaluated.
pub const MIN_PRIMER_LENGTH: usize = 19;
/// Longest candidate length evaluated.
pub const MAX_PRIMER_LENGTH: usize = 26;
/// Number of length variants per direction per amplicon.
pub const OPTIONS_PER_GROUP: usize = MAX_PRIMER_LENGTH - MIN_PRIMER_LENGTH + 1;

/// Reject any character outside the strict uppercase DNA alphabet.
pub fn validate_sequence(amplicon: &str, sequence: &str) -> Result<(), DesignError> {
    for (position, byte) in sequence.bytes().enumerate() {
        if !matches!(byte, b'A' | b'C' | b'G' | b'T') {
            return Err(DesignError::InvalidSequence {
                amplicon: amplicon.to_string(),
                base: byte as char,
                position,
            });
        }
    }
    Ok(())
}

/// Reverse complement of a validated `{A,C,G,T}` sequence.
pub fn reverse_complement(sequence: &str) -> String {
    let rc = bio::alphabets::dna::revcomp(sequence.as_bytes());
    // revcomp of ASCII DNA is ASCII
    String::from_utf8(rc).expect("reverse complement is valid UTF-8")
}

/// Enumerate all candidates for one amplicon: 8 forward (prefixes) followed
/// by 8 reverse (reverse-complemented suffixes).
///
/// Slicing clamps rather than errors: when the sequence is shorter than a
/// candidate length, both the prefix and the suffix degrade to the whole
/// sequence. Short input therefore yields duplicated candidates rather than
/// a failure; callers may warn (see the CLI) but generation proceeds.
///
/// Fails with [`DesignError::InvalidSequence`] on any non-ACGT character.
pub fn generate_candidates(
    amplicon_name: &str,
    sequence: &str,
) -> Result<Vec<PrimerCandidate>, DesignError> {
    validate_sequence(amplicon_name, sequence)?;

    let forward_name = format!("{amplicon_name} forward");
    let reverse_name = format!("{amplicon_name} reverse");

    let mut forward = Vec::with_capacity(OPTIONS_PER_GROUP);
    let mut reverse = Vec::with_capacity(OPTIONS_PER_GROUP);

    for (offset, length) in (MIN_PRIMER_LENGTH..=MAX_PRIMER_LENGTH).enumerate() {
        let option_group_index = offset as u32 + 1;

        let prefix_end = length.min(sequence.len());
        forward.push(PrimerCandidate {
            amplicon_name: amplicon_name.to_string(),
            primer_name: forward_name.clone(),
            direction: Direction::Forward,
            option_group_index,
            primer_sequence: sequence[..prefix_end].to_string(),
        });

        let suffix_start = sequence.len().saturating_sub(length);
        reverse.push(PrimerCandidate {
            amplicon_name: amplicon_name.to_string(),
            primer_name: reverse_name.clone(),
            direction: Direction::Reverse,
            option_group_index,
            primer_sequence: reverse_complement(&sequence[suffix_start..]),
        });
    }

    forward.append(&mut reverse);
    Ok(forward)
}

#[cfg(test)]
mod revcomp_tests {
    use super::*;

    #[test]
    fn complements_and_reverses() {
        assert_eq!(reverse_complement("ATGC"), "GCAT");
        assert_eq!(reverse_complement("AAAA"), "TTTT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn double_application_is_identity() {
        let s = "ATGCATGCATGCATGCATGC";
        assert_eq!(reverse_complement(&reverse_complement(s)), s);
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    const GENE_A: &str = "ATGCATGCATGCATGCATGCATGCATGCATGC"; // 32 bases

    #[test]
    fn eight_candidates_per_direction_in_length_order() {
        let cands = generate_candidates("geneA", GENE_A).unwrap();
        assert_eq!(cands.len(), 16);

        let forward: Vec<_> = cands.iter().filter(|c| c.direction == Direction::Forward).collect();
        let reverse: Vec<_> = cands.iter().filter(|c| c.direction == Direction::Reverse).collect();
        assert_eq!(forward.len(), 8);
        assert_eq!(reverse.len(), 8);

        for (i, c) in forward.iter().enumerate() {
            let length = MIN_PRIMER_LENGTH + i;
            assert_eq!(c.option_group_index, i as u32 + 1);
            assert_eq!(c.primer_name, "geneA forward");
            assert_eq!(c.primer_sequence, &GENE_A[..length]);
        }
        for (i, c) in reverse.iter().enumerate() {
            let length = MIN_PRIMER_LENGTH + i;
            assert_eq!(c.option_group_index, i as u32 + 1);
            assert_eq!(c.primer_name, "geneA reverse");
            assert_eq!(
                c.primer_sequence,
                reverse_complement(&GENE_A[GENE_A.len() - length..])
            );
        }
    }

    #[test]
    fn short_sequences_clamp_instead_of_erroring() {
        let seq = "ATGCATGCATGCATGCATGCG"; // 21 bases
        let cands = generate_candidates("short", seq).unwrap();
        assert_eq!(cands.len(), 16);
        // Lengths 21..=26 all clamp to the whole sequence.
        let forward: Vec<_> = cands.iter().filter(|c| c.direction == Direction::Forward).collect();
        assert_eq!(forward[2].primer_sequence, seq);
        assert_eq!(forward[7].primer_sequence, seq);
        let reverse: Vec<_> = cands.iter().filter(|c| c.direction == Direction::Reverse).collect();
        assert_eq!(reverse[7].primer_sequence, reverse_complement(seq));
    }

    #[test]
    fn invalid_characters_are_rejected() {
        let err = generate_candidates("bad", "ATGNATGCATGCATGCATGC").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'N'") && msg.contains("position 3"), "{msg}");
    }
}
