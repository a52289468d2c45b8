//! Per-group ranking by composite score.
//!
//! Rank is assigned from stable-sorted row position, not by joining on the
//! score value: a value join collapses exact ties unpredictably (tied rows
//! can share a rank, or a rank can vanish), so the tie policy is an explicit
//! configuration choice instead.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::primer::{RankedCandidate, WeightedCandidate};
use crate::score::group_rows;

/// How exact ties on `total_score` are resolved within a group.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TieBreak {
    /// Deterministic secondary key: lower `option_group_index` (shorter
    /// candidate) wins. Every group gets a strict permutation 1..=N and
    /// exactly one rank-1 row.
    #[default]
    OptionGroupIndex,
    /// Competition ranking: tied rows share the lowest position ("1224").
    /// A group may then contain several rank-1 rows.
    Competition,
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::OptionGroupIndex => "index",
            TieBreak::Competition => "competition",
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "index" | "option-group-index" => Ok(Self::OptionGroupIndex),
            "competition" | "shared" => Ok(Self::Competition),
            other => Err(format!("unknown tie-break policy: {other} (expected \"index\" or \"competition\")")),
        }
    }
}

/// Assign `option_group_rank` within each `primer_name` group, sorted by
/// `total_score` descending. Output row order equals input row order; only
/// the rank is derived from the sorted position.
pub fn rank_candidates(
    weighted: Vec<WeightedCandidate>,
    tie_break: TieBreak,
) -> Vec<RankedCandidate> {
    let groups = group_rows(weighted.iter().map(|w| w.scored.candidate.primer_name.as_str()));

    let mut ranks = vec![0u32; weighted.len()];
    for (_, rows) in &groups {
        let mut order = rows.clone();
        order.sort_by(|&a, &b| {
            weighted[b]
                .total_score
                .partial_cmp(&weighted[a].total_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    weighted[a]
                        .scored
                        .candidate
                        .option_group_index
                        .cmp(&weighted[b].scored.candidate.option_group_index)
                })
        });

        match tie_break {
            TieBreak::OptionGroupIndex => {
                for (position, &row) in order.iter().enumerate() {
                    ranks[row] = position as u32 + 1;
                }
            }
            TieBreak::Competition => {
                let mut current = 1u32;
                for (position, &row) in order.iter().enumerate() {
                    if position > 0
                        && weighted[row].total_score < weighted[order[position - 1]].total_score
                    {
                        current = position as u32 + 1;
                    }
                    ranks[row] = current;
                }
            }
        }
    }

    weighted
        .into_iter()
        .zip(ranks)
        .map(|(weighted, option_group_rank)| RankedCandidate {
            weighted,
            option_group_rank,
        })
        .collect()
}
