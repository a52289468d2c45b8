//! Per-candidate metrics and per-group normalization.
//!
//! Scoring runs in two passes. The first computes composition metrics and the
//! melting temperature for every candidate in isolation. The second groups
//! rows by `primer_name`, normalizes each target distance against the group
//! maximum and folds the axes into the weighted composite score. Both passes
//! map input records to fresh output records; rows are never mutated in
//! place.

use std::collections::HashMap;

use crate::error::{DesignError, ScoreAxis};
use crate::primer::{PrimerCandidate, ScoredCandidate, WeightedCandidate};
use crate::thermo;

/// Melting-temperature target (°C).
pub const MELT_TEMPERATURE_TARGET: f64 = 62.0;
/// GC-content target (%).
pub const GC_PERCENTAGE_TARGET: f64 = 50.0;
/// Weight of the melting-temperature axis in the composite score. Tunable
/// policy, not a physical constant: Tm counts double versus GC content and
/// the clamp point.
pub const MELT_SCORE_WEIGHT: f64 = 2.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute composition metrics and melting temperature for one candidate.
pub fn score_candidate(candidate: PrimerCandidate) -> Result<ScoredCandidate, DesignError> {
    let sequence = candidate.primer_sequence.as_bytes();

    let gc_clamp = match sequence.last() {
        Some(b'G') | Some(b'C') => 1,
        _ => 0,
    };
    let length = sequence.len();
    let gc_count = sequence.iter().filter(|b| matches!(b, b'G' | b'C')).count();
    let gc_percentage = round2(gc_count as f64 / length as f64 * 100.0);
    let melt_temperature = thermo::tm_calc(&candidate.primer_sequence)?;

    Ok(ScoredCandidate {
        gc_clamp,
        length,
        gc_percentage,
        melt_temperature,
        melt_temp_target_distance: (MELT_TEMPERATURE_TARGET - melt_temperature).abs(),
        gc_percentage_target_distance: (GC_PERCENTAGE_TARGET - gc_percentage).abs(),
        candidate,
    })
}

/// Score every candidate, preserving row order.
pub fn score_candidates(
    candidates: Vec<PrimerCandidate>,
) -> Result<Vec<ScoredCandidate>, DesignError> {
    candidates.into_iter().map(score_candidate).collect()
}

/// Group rows by `primer_name` in first-seen order, keeping row indices.
pub(crate) fn group_rows<'a, I>(keys: I) -> Vec<(String, Vec<usize>)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    let mut by_name: HashMap<String, usize> = HashMap::new();
    for (row, key) in keys.into_iter().enumerate() {
        match by_name.get(key) {
            Some(&g) => groups[g].1.push(row),
            None => {
                by_name.insert(key.to_string(), groups.len());
                groups.push((key.to_string(), vec![row]));
            }
        }
    }
    groups
}

/// Normalize target distances within each `primer_name` group and compute the
/// weighted composite score. Output row order equals input row order.
///
/// Each axis score is `1 − dist/max_dist` where `max_dist` is the group
/// maximum, so the worst candidate on an axis scores exactly 0 and the best
/// scores the group maximum. A zero group maximum would divide by zero and is
/// rejected with [`DesignError::DegenerateGroup`] — on the GC axis it would
/// mean all 8 length variants hit exactly 50% GC, which real input cannot do.
pub fn weight_groups(
    scored: Vec<ScoredCandidate>,
) -> Result<Vec<WeightedCandidate>, DesignError> {
    let groups = group_rows(scored.iter().map(|s| s.candidate.primer_name.as_str()));

    // Per-row (max_melt_dist, max_gc_dist) of the owning group.
    let mut maxima = vec![(0.0_f64, 0.0_f64); scored.len()];
    for (primer_name, rows) in &groups {
        let max_melt = rows
            .iter()
            .map(|&i| scored[i].melt_temp_target_distance)
            .fold(0.0, f64::max);
        let max_gc = rows
            .iter()
            .map(|&i| scored[i].gc_percentage_target_distance)
            .fold(0.0, f64::max);

        if max_melt == 0.0 {
            return Err(DesignError::DegenerateGroup {
                primer_name: primer_name.clone(),
                axis: ScoreAxis::MeltTemperature,
            });
        }
        if max_gc == 0.0 {
            return Err(DesignError::DegenerateGroup {
                primer_name: primer_name.clone(),
                axis: ScoreAxis::GcPercentage,
            });
        }
        for &i in rows {
            maxima[i] = (max_melt, max_gc);
        }
    }

    Ok(scored
        .into_iter()
        .zip(maxima)
        .map(|(row, (max_melt, max_gc))| {
            let melt_temperature_score = 1.0 - row.melt_temp_target_distance / max_melt;
            let gc_percentage_score = 1.0 - row.gc_percentage_target_distance / max_gc;
            let total_score = f64::from(row.gc_clamp)
                + MELT_SCORE_WEIGHT * melt_temperature_score
                + gc_percentage_score;
            WeightedCandidate {
                scored: row,
                melt_temperature_score,
                gc_percentage_score,
                total_score,
            }
        })
        .collect())
}


#[cfg(test)]
mod weighting_tests {
    use super::*;
    use crate::generate::generate_candidates;
    use crate::primer::Direction;

    const GENE_A: &str = "ATGCATGCATGCATGCATGCATGCATGCATGC";

    #[test]
    fn axis_scores_are_normalized_per_group() {
        let scored = score_candidates(generate_candidates("geneA", GENE_A).unwrap()).unwrap();
        let weighted = weight_groups(scored).unwrap();

        for group in [Direction::Forward, Direction::Reverse] {
            let rows: Vec<_> = weighted
                .iter()
                .filter(|w| w.scored.candidate.direction == group)
                .collect();
            assert_eq!(rows.len(), 8);
            for w in &rows {
                assert!((0.0..=1.0).contains(&w.melt_temperature_score));
                assert!((0.0..=1.0).contains(&w.gc_percentage_score));
                assert!((0.0..=4.0).contains(&w.total_score));
            }
            // The maximum-distance candidate scores exactly 0 on its axis.
            assert!(rows.iter().any(|w| w.melt_temperature_score == 0.0));
            assert!(rows.iter().any(|w| w.gc_percentage_score == 0.0));
        }
    }

    #[test]
    fn composite_weighting_for_a_known_candidate() {
        let scored = score_candidates(generate_candidates("geneA", GENE_A).unwrap()).unwrap();
        let weighted = weight_groups(scored).unwrap();
        // Forward 20-mer (option_group_index 2): clamp 1, gc score 1, melt
        // score 0.506266 -> total 3.012533.
        let w = weighted
            .iter()
            .find(|w| {
                w.scored.candidate.direction == Direction::Forward
                    && w.scored.candidate.option_group_index == 2
            })
            .unwrap();
        assert_eq!(w.scored.gc_clamp, 1);
        assert_eq!(w.gc_percentage_score, 1.0);
        assert!((w.total_score - 3.012532833).abs() < 1e-6);
    }

    #[test]
    fn zero_divisor_is_a_degenerate_group_error() {
        // Hand-built group whose GC distances are all zero.
        let mut scored = score_candidates(generate_candidates("geneA", GENE_A).unwrap()).unwrap();
        for s in scored.iter_mut().filter(|s| s.candidate.direction == Direction::Forward) {
            s.gc_percentage_target_distance = 0.0;
        }
        let err = weight_groups(scored).unwrap_err();
        assert!(err.to_string().contains("GC-percentage"), "{err}");
        assert!(err.to_string().contains("geneA forward"), "{err}");
    }
}
