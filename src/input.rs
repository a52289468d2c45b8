//! CSV ingest for amplicon submissions.
//!
//! The upload format recognizes exactly two columns, matched
//! case-insensitively: `amplicon name` and `sequence`. Anything else is an
//! invalid schema; that outcome is reported as a validity flag plus a
//! human-readable message rather than an error, so the presentation layer can
//! show it to the submitter without any computation having run. I/O and CSV
//! parse failures are real errors and bubble via `anyhow`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::primer::AmpliconInput;

/// The only recognized column headers (after lowercasing and trimming).
pub const EXPECTED_COLUMNS: [&str; 2] = ["amplicon name", "sequence"];

/// Outcome of schema validation on an uploaded table.
#[derive(Clone, Debug)]
pub enum CsvOutcome {
    /// Both expected columns present, nothing else: rows are parsed and
    /// cleaned.
    Valid(Vec<AmpliconInput>),
    /// Schema mismatch; `message` names the expected and detected columns.
    Invalid { message: String },
}

impl CsvOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, CsvOutcome::Valid(_))
    }
}

/// Parse a CSV submission from any reader.
pub fn read_amplicons<R: Read>(reader: R) -> anyhow::Result<CsvOutcome> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    let unexpected: Vec<&str> = headers
        .iter()
        .map(String::as_str)
        .filter(|h| !EXPECTED_COLUMNS.contains(h))
        .collect();
    let missing: Vec<&str> = EXPECTED_COLUMNS
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h == c))
        .collect();
    if !unexpected.is_empty() || !missing.is_empty() {
        return Ok(CsvOutcome::Invalid {
            message: format!(
                "Expected columns {:?}, but {:?} detected",
                EXPECTED_COLUMNS, headers
            ),
        });
    }

    // Both present and nothing else, so the positions are well-defined.
    let name_idx = headers.iter().position(|h| h == "amplicon name").expect("validated header");
    let seq_idx = headers.iter().position(|h| h == "sequence").expect("validated header");

    let mut amplicons = Vec::new();
    for record in rdr.records() {
        let row = record?;
        let name = row.get(name_idx).unwrap_or("").trim();
        let sequence = row.get(seq_idx).unwrap_or("");
        amplicons.push(AmpliconInput::new(name, sequence));
    }
    Ok(CsvOutcome::Valid(amplicons))
}

/// Parse a CSV submission from a file path.
pub fn read_amplicons_path<P: AsRef<Path>>(path: P) -> anyhow::Result<CsvOutcome> {
    let file = File::open(path.as_ref())?;
    read_amplicons(file)
}

#[cfg(test)]
mod ingest_tests {
    use super::*;

    #[test]
    fn parses_and_cleans_a_valid_submission() {
        let csv = "Amplicon Name,Sequence\ngeneA, atgcatgc\ngeneB,ACGTACGT\n";
        match read_amplicons(csv.as_bytes()).unwrap() {
            CsvOutcome::Valid(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].amplicon_name, "geneA");
                assert_eq!(rows[0].sequence, "ATGCATGC");
                assert_eq!(rows[1].amplicon_name, "geneB");
            }
            CsvOutcome::Invalid { message } => panic!("unexpected rejection: {message}"),
        }
    }

    #[test]
    fn headers_are_matched_case_insensitively() {
        let csv = "AMPLICON NAME,SEQUENCE\ngeneA,ACGT\n";
        assert!(read_amplicons(csv.as_bytes()).unwrap().is_valid());
    }

    #[test]
    fn unexpected_column_is_rejected_with_a_message() {
        let csv = "amplicon name,seq\ngeneA,ACGT\n";
        match read_amplicons(csv.as_bytes()).unwrap() {
            CsvOutcome::Invalid { message } => {
                assert!(message.contains("amplicon name"), "{message}");
                assert!(message.contains("\"seq\""), "{message}");
            }
            CsvOutcome::Valid(_) => panic!("schema should have been rejected"),
        }
    }

    #[test]
    fn missing_column_is_rejected() {
        let csv = "amplicon name\ngeneA\n";
        assert!(!read_amplicons(csv.as_bytes()).unwrap().is_valid());
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "sequence,amplicon name\nACGTACGT,geneA\n";
        match read_amplicons(csv.as_bytes()).unwrap() {
            CsvOutcome::Valid(rows) => {
                assert_eq!(rows[0].amplicon_name, "geneA");
                assert_eq!(rows[0].sequence, "ACGTACGT");
            }
            CsvOutcome::Invalid { message } => panic!("unexpected rejection: {message}"),
        }
    }
}
