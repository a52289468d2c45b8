//! Tabular interchange with downstream consumers.
//!
//! The ranked-candidate column names and their order are a stable contract
//! with persistence and archival collaborators; do not rename or reorder them
//! without versioning. Both the full ranked table and the optimal-only subset
//! share this schema.

use std::path::Path;

use polars::prelude::*;

use crate::primer::RankedCandidate;

/// Column names of the interchange schema, in contract order.
pub const RANKED_COLUMNS: [&str; 15] = [
    "amplicon_name",
    "primer_name",
    "direction",
    "option_group_index",
    "primer_sequence",
    "gc_clamp",
    "length",
    "gc_percentage",
    "melt_temperature",
    "melt_temp_target_distance",
    "gc_percentage_target_distance",
    "melt_temperature_score",
    "gc_percentage_score",
    "total_score",
    "option_group_rank",
];

/// Build a `DataFrame` from ranked rows, one column vector per field.
pub fn ranked_frame(rows: &[RankedCandidate]) -> PolarsResult<DataFrame> {
    let amplicon_v: Vec<String> = rows.iter().map(|r| r.amplicon_name().to_string()).collect();
    let primer_v: Vec<String> = rows.iter().map(|r| r.primer_name().to_string()).collect();
    let direction_v: Vec<String> = rows.iter().map(|r| r.direction().as_str().to_string()).collect();
    let group_idx_v: Vec<u32> = rows.iter().map(|r| r.option_group_index()).collect();
    let sequence_v: Vec<String> = rows.iter().map(|r| r.primer_sequence().to_string()).collect();
    let clamp_v: Vec<u32> = rows.iter().map(|r| u32::from(r.weighted.scored.gc_clamp)).collect();
    let length_v: Vec<u32> = rows.iter().map(|r| r.weighted.scored.length as u32).collect();
    let gc_v: Vec<f64> = rows.iter().map(|r| r.weighted.scored.gc_percentage).collect();
    let tm_v: Vec<f64> = rows.iter().map(|r| r.weighted.scored.melt_temperature).collect();
    let tm_dist_v: Vec<f64> = rows.iter().map(|r| r.weighted.scored.melt_temp_target_distance).collect();
    let gc_dist_v: Vec<f64> = rows.iter().map(|r| r.weighted.scored.gc_percentage_target_distance).collect();
    let tm_score_v: Vec<f64> = rows.iter().map(|r| r.weighted.melt_temperature_score).collect();
    let gc_score_v: Vec<f64> = rows.iter().map(|r| r.weighted.gc_percentage_score).collect();
    let total_v: Vec<f64> = rows.iter().map(|r| r.total_score()).collect();
    let rank_v: Vec<u32> = rows.iter().map(|r| r.option_group_rank).collect();

    df!(
        "amplicon_name"                 => amplicon_v,
        "primer_name"                   => primer_v,
        "direction"                     => direction_v,
        "option_group_index"            => group_idx_v,
        "primer_sequence"               => sequence_v,
        "gc_clamp"                      => clamp_v,
        "length"                        => length_v,
        "gc_percentage"                 => gc_v,
        "melt_temperature"              => tm_v,
        "melt_temp_target_distance"     => tm_dist_v,
        "gc_percentage_target_distance" => gc_dist_v,
        "melt_temperature_score"        => tm_score_v,
        "gc_percentage_score"           => gc_score_v,
        "total_score"                   => total_v,
        "option_group_rank"             => rank_v,
    )
}

/// Write a frame as headered CSV.
pub fn write_csv<P: AsRef<Path>>(frame: &mut DataFrame, path: P) -> PolarsResult<()> {
    let file = std::fs::File::create(path.as_ref())?;
    CsvWriter::new(file).include_header(true).finish(frame)
}

#[cfg(test)]
mod frame_tests {
    use super::*;
    use crate::generate::generate_candidates;
    use crate::rank::{rank_candidates, TieBreak};
    use crate::score::{score_candidates, weight_groups};

    #[test]
    fn columns_follow_the_interchange_contract() {
        let seq = "ATGCATGCATGCATGCATGCATGCATGCATGC";
        let scored = score_candidates(generate_candidates("geneA", seq).unwrap()).unwrap();
        let ranked = rank_candidates(weight_groups(scored).unwrap(), TieBreak::OptionGroupIndex);
        let df = ranked_frame(&ranked).unwrap();

        assert_eq!(df.height(), 16);
        let names: Vec<&str> = df.get_column_names();
        assert_eq!(names, RANKED_COLUMNS.to_vec());
    }

    #[test]
    fn empty_input_yields_an_empty_frame() {
        let df = ranked_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), RANKED_COLUMNS.len());
    }
}
