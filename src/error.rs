//! Structured errors raised by the design pipeline.
//!
//! The core performs no logging and no user messaging; callers (the CLI, or
//! any embedding host) map these variants to user-facing text. Schema problems
//! in uploaded CSVs are *not* represented here — they are surfaced by the
//! ingest layer as a validity flag plus message before the pipeline runs
//! (see [`crate::input::CsvOutcome`]).

use crate::primer::Direction;
use thiserror::Error;

/// Which normalization axis a group failed on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScoreAxis {
    MeltTemperature,
    GcPercentage,
}

impl core::fmt::Display for ScoreAxis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScoreAxis::MeltTemperature => write!(f, "melting-temperature"),
            ScoreAxis::GcPercentage => write!(f, "GC-percentage"),
        }
    }
}

/// Fatal conditions in candidate generation, scoring or selection.
#[derive(Debug, Error)]
pub enum DesignError {
    /// A sequence contains a character outside `{A, C, G, T}`. The reverse
    /// complement and nearest-neighbor lookups are undefined for such input,
    /// so the whole submission is rejected rather than silently skipped.
    #[error("invalid base {base:?} at position {position} in sequence for amplicon {amplicon:?}")]
    InvalidSequence {
        amplicon: String,
        base: char,
        position: usize,
    },

    /// A dinucleotide had no entry in the nearest-neighbor table. Only
    /// reachable when `tm_calc` is called directly on unvalidated input.
    #[error("no nearest-neighbor parameters for dinucleotide {pair:?}")]
    UnknownPair { pair: String },

    /// Every candidate in a group hit the target exactly on one axis, so the
    /// normalization divisor is zero. Propagated instead of producing
    /// NaN/inf scores.
    #[error("all candidates for {primer_name:?} hit the {axis} target exactly; cannot normalize")]
    DegenerateGroup {
        primer_name: String,
        axis: ScoreAxis,
    },

    /// `add_overhangs` was set but the overhang for this direction was not.
    #[error("add_overhangs is set but no {direction} overhang was configured")]
    MissingOverhang { direction: Direction },
}
