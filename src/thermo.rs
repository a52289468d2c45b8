//! Nearest-neighbor thermodynamics and the modified Breslauer melting
//! temperature.
//!
//! Parameters follow Breslauer et al. (PNAS 1986); the equation and its salt
//! and primer-concentration corrections match the OligoCalc "modified
//! Breslauer" variant. The table is embedded as `const` data: process-wide,
//! read-only, safe to share across threads without locking.
//!
//! # Examples
//! ```
//! let tm = primerpick::thermo::tm_calc("ATGCATGCATGCATGCATGC").unwrap();
//! assert!((tm - 70.96).abs() < 0.01);
//! ```

use crate::error::DesignError;

/// Thermodynamic parameters for one dinucleotide stack.
///
/// `enthalpy` (ΔH, kcal/mol) and `entropy` (ΔS, cal/(mol·K)) drive the
/// melting-temperature equation; `free_energy` (ΔG, kcal/mol) is published
/// alongside them and kept for completeness but does not enter the formula.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestNeighbor {
    /// The dinucleotide, uppercase, e.g. `b"AT"`.
    pub pair: [u8; 2],
    /// ΔH in kcal/mol (sign-flipped, as tabulated by Breslauer).
    pub enthalpy: f64,
    /// ΔS in cal/(mol·K) (sign-flipped, as tabulated by Breslauer).
    pub entropy: f64,
    /// ΔG in kcal/mol. Unused by [`tm_calc`].
    pub free_energy: f64,
}

/// All 16 dinucleotide stacks, transcribed verbatim from the Breslauer table.
pub const NEAREST_NEIGHBORS: [NearestNeighbor; 16] = [
    NearestNeighbor { pair: *b"AA", enthalpy: 9.1, entropy: 24.0, free_energy: 1.9 },
    NearestNeighbor { pair: *b"AT", enthalpy: 8.6, entropy: 23.9, free_energy: 1.5 },
    NearestNeighbor { pair: *b"AG", enthalpy: 7.8, entropy: 20.8, free_energy: 1.6 },
    NearestNeighbor { pair: *b"AC", enthalpy: 6.5, entropy: 17.3, free_energy: 1.3 },
    NearestNeighbor { pair: *b"TT", enthalpy: 9.1, entropy: 24.0, free_energy: 1.9 },
    NearestNeighbor { pair: *b"TA", enthalpy: 6.0, entropy: 16.9, free_energy: 0.9 },
    NearestNeighbor { pair: *b"TG", enthalpy: 5.8, entropy: 12.9, free_energy: 1.9 },
    NearestNeighbor { pair: *b"TC", enthalpy: 5.6, entropy: 13.5, free_energy: 1.6 },
    NearestNeighbor { pair: *b"GG", enthalpy: 11.0, entropy: 26.6, free_energy: 3.1 },
    NearestNeighbor { pair: *b"GC", enthalpy: 11.1, entropy: 26.7, free_energy: 3.1 },
    NearestNeighbor { pair: *b"GA", enthalpy: 5.6, entropy: 13.5, free_energy: 1.6 },
    NearestNeighbor { pair: *b"GT", enthalpy: 6.5, entropy: 17.3, free_energy: 1.3 },
    NearestNeighbor { pair: *b"CC", enthalpy: 11.0, entropy: 26.6, free_energy: 3.1 },
    NearestNeighbor { pair: *b"CG", enthalpy: 11.9, entropy: 27.8, free_energy: 3.6 },
    NearestNeighbor { pair: *b"CA", enthalpy: 5.8, entropy: 12.9, free_energy: 1.9 },
    NearestNeighbor { pair: *b"CT", enthalpy: 7.8, entropy: 20.8, free_energy: 1.6 },
];

/// Helix-initiation enthalpy correction (kcal/mol).
pub const HELIX_INITIATION_ENTHALPY: f64 = 3.4;
/// Gas constant in kcal/(mol·K).
pub const GAS_CONSTANT_KCAL: f64 = 0.0019872;
/// Assumed primer concentration (mol/L).
pub const PRIMER_CONCENTRATION: f64 = 0.25e-7;
/// Assumed monovalent salt concentration (mol/L).
pub const SALT_CONCENTRATION: f64 = 0.05;
/// Kelvin-to-Celsius conversion folded with the Breslauer correction term.
pub const CELSIUS_OFFSET: f64 = 272.15;

/// Look up the parameters for one dinucleotide.
pub fn lookup(pair: [u8; 2]) -> Option<&'static NearestNeighbor> {
    NEAREST_NEIGHBORS.iter().find(|nn| nn.pair == pair)
}

/// Modified Breslauer melting temperature (°C) for a primer sequence.
///
/// Slides a 2-wide window over the sequence, sums nearest-neighbor ΔH/ΔS
/// contributions and applies:
///
/// ```text
/// Tm = (ΣH − 3.4) / (ΣS/1000 + R·ln(1/C_primer)) + 16.6·log10(C_salt) − 272.15
/// ```
///
/// The model is meaningful for non-symmetric oligonucleotides longer than
/// 8 bases containing at least one G or C. No length or composition check is
/// performed; shorter or degenerate input still produces a number, it is just
/// not thermodynamically meaningful.
///
/// Errors with [`DesignError::UnknownPair`] if any dinucleotide contains a
/// character outside `{A, C, G, T}`.
pub fn tm_calc(sequence: &str) -> Result<f64, DesignError> {
    let mut h_total = 0.0;
    let mut s_total = 0.0;
    for window in sequence.as_bytes().windows(2) {
        let pair = [window[0], window[1]];
        let nn = lookup(pair).ok_or_else(|| DesignError::UnknownPair {
            pair: String::from_utf8_lossy(&pair).into_owned(),
        })?;
        h_total += nn.enthalpy;
        s_total += nn.entropy;
    }

    let numerator = h_total - HELIX_INITIATION_ENTHALPY;
    let denominator =
        s_total / 1000.0 + GAS_CONSTANT_KCAL * (1.0 / PRIMER_CONCENTRATION).ln();
    Ok(numerator / denominator + 16.6 * SALT_CONCENTRATION.log10() - CELSIUS_OFFSET)
}

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn sixteen_entries_cover_the_full_alphabet() {
        assert_eq!(NEAREST_NEIGHBORS.len(), 16);
        for a in [b'A', b'C', b'G', b'T'] {
            for b in [b'A', b'C', b'G', b'T'] {
                assert!(lookup([a, b]).is_some(), "missing pair {}{}", a as char, b as char);
            }
        }
    }

    #[test]
    fn lookup_matches_published_values() {
        let cg = lookup(*b"CG").unwrap();
        assert_eq!(cg.enthalpy, 11.9);
        assert_eq!(cg.entropy, 27.8);
        assert_eq!(cg.free_energy, 3.6);
        assert!(lookup(*b"NA").is_none());
    }
}

#[cfg(test)]
mod tm_tests {
    use super::*;

    #[test]
    fn matches_known_values() {
        // Computed independently with the same table and equation.
        let cases = [
            ("ATGCATGCATGCATGCATGC", 70.96092717983089),
            ("GCGCGCGCGCGCGCGCGCGC", 95.21294159898588),
            ("ATATATATATATATATATAT", 26.996972840490457),
            ("ATGCATGCATGCATGCATG", 67.34918035249359),
        ];
        for (seq, expected) in cases {
            let tm = tm_calc(seq).unwrap();
            assert!((tm - expected).abs() < 1e-9, "{seq}: {tm} != {expected}");
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let a = tm_calc("GCATGCATGCATGCATGCA").unwrap();
        let b = tm_calc("GCATGCATGCATGCATGCA").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_base_is_a_lookup_error() {
        let err = tm_calc("ACGTN").unwrap_err();
        assert!(err.to_string().contains("TN"));
    }

    #[test]
    fn short_input_still_computes_a_number() {
        // Below the model's validity range, but not an error.
        assert!(tm_calc("AC").unwrap().is_finite());
        assert!(tm_calc("A").unwrap().is_finite());
    }
}
