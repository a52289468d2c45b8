#![forbid(unsafe_code)]
//! # primerpick
//!
//! Selects and ranks **PCR primer candidates** for a set of input amplicons.
//! Every amplicon gets 8 forward (prefix) and 8 reverse (reverse-complemented
//! suffix) candidates between 19 and 26 bases; each candidate is scored by
//! melting-temperature and GC-content proximity to target values plus a
//! GC-clamp point, and ranked within its `amplicon + direction` group.
//!
//! ## Highlights
//! - 🌡️ **Modified Breslauer Tm**: nearest-neighbor table embedded as
//!   `const` data, exact reference constants ([`thermo`]).
//! - 🧮 **Pure pipeline**: Generator → Scorer → Ranker → Selector, each stage
//!   mapping immutable records to immutable records; safe to run concurrently
//!   for independent submissions.
//! - 🎯 **Explicit tie policy**: rank is assigned by stable-sorted row
//!   position with a configurable tie-break ([`rank::TieBreak`]), so exact
//!   score ties never collapse or drop a rank.
//!
//! ## Examples
//! ```rust
//! use primerpick::{design_primers, AmpliconInput, DesignConfig};
//!
//! let amplicons = vec![AmpliconInput::new("geneA", "ATGCATGCATGCATGCATGCATGCATGCATGC")];
//! let out = design_primers(&amplicons, &DesignConfig::default()).unwrap();
//! assert_eq!(out.ranked.len(), 16);   // 8 per direction
//! assert_eq!(out.optimal.len(), 2);   // one winner per direction
//! ```
//!
//! ## Degenerate input
//! Sequences shorter than 26 bases yield fewer than 8 distinct-length
//! candidates per direction (the longer slices clamp to the whole sequence);
//! below 19 bases every candidate duplicates it. The core proceeds in both
//! cases; the CLI reports a warning instead of rejecting the row.

pub mod error;
pub mod generate;
pub mod input;
pub mod primer;
pub mod rank;
pub mod score;
pub mod select;
pub mod table;
pub mod thermo;

pub use error::{DesignError, ScoreAxis};
pub use generate::generate_candidates;
pub use input::{read_amplicons, read_amplicons_path, CsvOutcome};
pub use primer::{AmpliconInput, Direction, PrimerCandidate, RankedCandidate};
pub use rank::TieBreak;
pub use select::DesignConfig;
pub use thermo::tm_calc;

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The two tables produced by a design run, sharing the interchange schema
/// of [`table::RANKED_COLUMNS`].
#[derive(Clone, Debug)]
pub struct DesignOutput {
    /// Every candidate, scored and ranked, in generation order.
    pub ranked: Vec<RankedCandidate>,
    /// The `option_group_rank == 1` subset, overhangs applied if configured.
    pub optimal: Vec<RankedCandidate>,
}

/// Run the full design pipeline over a validated input table.
///
/// Pure function of its arguments: no logging, no I/O, no shared mutable
/// state. The nearest-neighbor table is process-wide read-only data.
///
/// # Errors
/// [`DesignError::InvalidSequence`] on any non-ACGT character, and
/// [`DesignError::DegenerateGroup`] / [`DesignError::MissingOverhang`] as
/// documented on the individual stages.
pub fn design_primers(
    amplicons: &[AmpliconInput],
    config: &DesignConfig,
) -> Result<DesignOutput, DesignError> {
    let mut candidates = Vec::with_capacity(amplicons.len() * 2 * generate::OPTIONS_PER_GROUP);
    for amplicon in amplicons {
        candidates.extend(generate_candidates(&amplicon.amplicon_name, &amplicon.sequence)?);
    }

    let scored = score::score_candidates(candidates)?;
    let weighted = score::weight_groups(scored)?;
    let ranked = rank::rank_candidates(weighted, config.tie_break);
    let optimal = select::select_optimal(&ranked, config)?;

    Ok(DesignOutput { ranked, optimal })
}
