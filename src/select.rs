//! Optimal-primer selection and the configuration surface that controls it.

use crate::error::DesignError;
use crate::primer::{Direction, RankedCandidate};
use crate::rank::TieBreak;

/// Options recognized by the design pipeline.
///
/// Overhangs only affect the Result Selector: when `add_overhangs` is set the
/// configured upstream sequence is prepended to every forward optimal primer
/// and the downstream sequence to every reverse one. Overhang strings are
/// concatenated as-is, with no alphabet validation or deduplication.
#[derive(Clone, Debug, Default)]
pub struct DesignConfig {
    pub add_overhangs: bool,
    pub upstream_overhang: Option<String>,
    pub downstream_overhang: Option<String>,
    pub tie_break: TieBreak,
}

/// Filter the ranked table down to `option_group_rank == 1` rows, preserving
/// original row order, and apply configured overhangs.
///
/// With the default [`TieBreak::OptionGroupIndex`] policy this yields exactly
/// one forward and one reverse row per amplicon; under
/// [`TieBreak::Competition`] tied winners all survive the filter.
pub fn select_optimal(
    ranked: &[RankedCandidate],
    config: &DesignConfig,
) -> Result<Vec<RankedCandidate>, DesignError> {
    let mut optimal: Vec<RankedCandidate> = ranked
        .iter()
        .filter(|r| r.option_group_rank == 1)
        .cloned()
        .collect();

    if config.add_overhangs {
        for row in &mut optimal {
            let direction = row.direction();
            let overhang = match direction {
                Direction::Forward => config.upstream_overhang.as_deref(),
                Direction::Reverse => config.downstream_overhang.as_deref(),
            }
            .ok_or(DesignError::MissingOverhang { direction })?;

            let sequence = &mut row.weighted.scored.candidate.primer_sequence;
            *sequence = format!("{overhang}{sequence}");
        }
    }

    Ok(optimal)
}
