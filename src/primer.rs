//! Core data model for the design pipeline.
//!
//! Each pipeline stage consumes the previous stage's records and produces new
//! immutable ones; nothing here is mutated in place after creation, so the
//! whole pipeline stays a pure function over its input table and is safe to
//! run concurrently for independent submissions.

use core::fmt;

/// Primer orientation relative to the amplicon.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Binds the start of the sense strand (amplicon prefix).
    Forward,
    /// Binds the complement of the 3′ end (reverse-complemented suffix).
    Reverse,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One validated input row: a named amplicon and its cleaned sequence.
///
/// The name is a unique, case-sensitive key. Sequences shorter than 26 bases
/// yield fewer than 8 distinct-length candidates per direction (the longer
/// slices clamp to the whole sequence); shorter than 19 bases every candidate
/// duplicates it. Neither case is rejected here — see the crate docs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AmpliconInput {
    pub amplicon_name: String,
    pub sequence: String,
}

impl AmpliconInput {
    /// Build an input row, cleaning the raw sequence with [`clean_sequence`].
    pub fn new(amplicon_name: impl Into<String>, raw_sequence: &str) -> Self {
        Self {
            amplicon_name: amplicon_name.into(),
            sequence: clean_sequence(raw_sequence),
        }
    }
}

/// Normalize a raw sequence string: trim surrounding whitespace, drop
/// embedded line breaks, uppercase. Alphabet validation happens later, at
/// candidate generation.
pub fn clean_sequence(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// One enumerated primer candidate, before scoring.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimerCandidate {
    /// Key of the amplicon this candidate belongs to.
    pub amplicon_name: String,
    /// Group key: `"<amplicon_name> forward"` or `"<amplicon_name> reverse"`.
    /// The 8 length-variants of a group compete only against each other.
    pub primer_name: String,
    pub direction: Direction,
    /// 1-based index of the length offset within the group (1 ↦ 19 bases,
    /// 8 ↦ 26 bases).
    pub option_group_index: u32,
    pub primer_sequence: String,
}

/// A candidate with its composition metrics and melting temperature.
#[derive(Clone, Debug)]
pub struct ScoredCandidate {
    pub candidate: PrimerCandidate,
    /// 1 if the 3′-terminal base is G or C, else 0.
    pub gc_clamp: u8,
    pub length: usize,
    /// GC fraction as a percentage, rounded to 2 decimals.
    pub gc_percentage: f64,
    /// Modified Breslauer melting temperature (°C).
    pub melt_temperature: f64,
    /// `|62 − melt_temperature|`.
    pub melt_temp_target_distance: f64,
    /// `|50 − gc_percentage|`.
    pub gc_percentage_target_distance: f64,
}

/// A scored candidate with group-normalized axis scores and the weighted
/// composite, rank not yet assigned.
#[derive(Clone, Debug)]
pub struct WeightedCandidate {
    pub scored: ScoredCandidate,
    /// `1 − dist/max_dist` over the group; in `[0, 1]`, 1 is best.
    pub melt_temperature_score: f64,
    /// `1 − dist/max_dist` over the group; in `[0, 1]`, 1 is best.
    pub gc_percentage_score: f64,
    /// `gc_clamp + 2·melt_temperature_score + gc_percentage_score`, in `[0, 4]`.
    pub total_score: f64,
}

/// Final output row: a weighted candidate with its rank within the group.
#[derive(Clone, Debug)]
pub struct RankedCandidate {
    pub weighted: WeightedCandidate,
    /// 1-based rank within the `primer_name` group; 1 is best.
    pub option_group_rank: u32,
}

impl RankedCandidate {
    pub fn amplicon_name(&self) -> &str {
        &self.weighted.scored.candidate.amplicon_name
    }
    pub fn primer_name(&self) -> &str {
        &self.weighted.scored.candidate.primer_name
    }
    pub fn direction(&self) -> Direction {
        self.weighted.scored.candidate.direction
    }
    pub fn option_group_index(&self) -> u32 {
        self.weighted.scored.candidate.option_group_index
    }
    pub fn primer_sequence(&self) -> &str {
        &self.weighted.scored.candidate.primer_sequence
    }
    pub fn total_score(&self) -> f64 {
        self.weighted.total_score
    }
}

#[cfg(test)]
mod clean_tests {
    use super::*;

    #[test]
    fn strips_whitespace_and_line_breaks_and_uppercases() {
        assert_eq!(clean_sequence("  atgc\nATGC\r\n "), "ATGCATGC");
        assert_eq!(clean_sequence("ACGT"), "ACGT");
    }

    #[test]
    fn interior_spaces_are_kept_for_later_validation() {
        // Only line breaks are removed; a stray interior space surfaces as an
        // InvalidSequence error downstream instead of being papered over.
        assert_eq!(clean_sequence("AC GT"), "AC GT");
    }

    #[test]
    fn amplicon_input_cleans_on_construction() {
        let a = AmpliconInput::new("geneA", " acgt\n");
        assert_eq!(a.amplicon_name, "geneA");
        assert_eq!(a.sequence, "ACGT");
    }
}
