//! Turning raw protein haplotype records into [`Haplotype`]s.
//!
//! The raw records mirror the JSON written by the variant annotator. Every
//! field may be absent; missing values fall back to defaults instead of
//! failing the record.
use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Deserialize;

use crate::models::{Haplotype, SampleIds};
use crate::parser::parse_diff;

/// One processed unit of input: a JSON document or one line of a JSON-lines file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUnit {
    #[serde(default)]
    pub protein_haplotypes: Vec<RawHaplotype>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawHaplotype {
    #[serde(default)]
    pub frequency: f64,
    #[serde(default)]
    pub samples: BTreeMap<String, i64>,
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default = "default_aligned_sequences")]
    pub aligned_sequences: Vec<String>,
    #[serde(default)]
    pub diffs: Vec<RawDiff>,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDiff {
    #[serde(default)]
    pub diff: Option<String>,
}

fn default_aligned_sequences() -> Vec<String> {
    vec![String::new()]
}

///
/// Build a [`Haplotype`] from a raw record.
///
/// Diffs that do not parse are dropped; the rest of the haplotype is kept.
///
pub fn normalize(raw: RawHaplotype) -> Haplotype {
    let RawHaplotype {
        frequency,
        samples,
        hex,
        id,
        aligned_sequences,
        diffs: raw_diffs,
        name,
    } = raw;

    if aligned_sequences.is_empty() {
        warn!("Haplotype {:?} has no aligned sequences, deletions cannot be resolved", name);
    }
    let reference = aligned_sequences
        .first()
        .map(String::as_str)
        .unwrap_or_default();

    let mut diffs = Vec::with_capacity(raw_diffs.len());
    for raw_diff in raw_diffs {
        let Some(notation) = raw_diff.diff else {
            continue;
        };
        match parse_diff(&notation, reference) {
            Some(diff) => diffs.push(diff),
            None => debug!("Dropping unparseable diff {:?} of haplotype {:?}", notation, name),
        }
    }

    Haplotype {
        frequency,
        samples,
        aligned_sequences,
        diffs,
        name,
        id: hex.or(id).unwrap_or_default(),
    }
}

///
/// Normalize every haplotype of a unit and collect the ids of all samples
/// they mention, in first-seen order.
///
pub fn normalize_unit(unit: RawUnit) -> (Vec<Haplotype>, SampleIds) {
    let mut sample_ids = SampleIds::new();
    let mut haplotypes = Vec::with_capacity(unit.protein_haplotypes.len());

    for raw in unit.protein_haplotypes {
        for sample_id in raw.samples.keys() {
            sample_ids.insert(sample_id);
        }
        haplotypes.push(normalize(raw));
    }

    (haplotypes, sample_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::Diff;

    #[fixture]
    fn unit() -> RawUnit {
        serde_json::from_str(
            r#"{
                "protein_haplotypes": [
                    {
                        "frequency": 0.25,
                        "samples": {"NA001": 2, "NA002": 1},
                        "hex": "9f2c",
                        "aligned_sequences": ["MKTGAGLL", "MKTG-GLL"],
                        "diffs": [{"diff": "5del{3}"}, {"diff": "not a diff"}, {"diff": null}],
                        "name": "ENSP0001:5del{3}"
                    },
                    {
                        "samples": {"NA003": 1, "NA001": 1},
                        "diffs": [{"diff": "2T>A"}],
                        "name": "ENSP0001:2T>A"
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[rstest]
    fn test_normalize_unit(unit: RawUnit) {
        let (haplotypes, sample_ids) = normalize_unit(unit);

        assert_eq!(haplotypes.len(), 2);
        assert_eq!(
            sample_ids.into_vec(),
            vec!["NA001".to_string(), "NA002".to_string(), "NA003".to_string()]
        );

        let first = &haplotypes[0];
        assert_eq!(first.frequency, 0.25);
        assert_eq!(first.id, "9f2c");
        assert_eq!(first.protein_id(), "ENSP0001");
        assert_eq!(
            first.diffs,
            vec![Diff {
                pos: 5,
                ref_allele: "G".to_string(),
                alt: Some("<DEL>".to_string()),
                info: Some("SVTYPE=DEL;END=8".to_string()),
            }]
        );
    }

    #[rstest]
    fn test_missing_fields_are_defaulted(unit: RawUnit) {
        let (haplotypes, _) = normalize_unit(unit);
        let second = &haplotypes[1];

        assert_eq!(second.frequency, 0.0);
        assert_eq!(second.id, "");
        assert_eq!(second.aligned_sequences, vec![String::new()]);
        assert_eq!(second.diffs.len(), 1);
    }

    #[rstest]
    fn test_empty_record() {
        let raw: RawHaplotype = serde_json::from_str("{}").unwrap();
        let haplotype = normalize(raw);

        assert!(haplotype.samples.is_empty());
        assert!(haplotype.diffs.is_empty());
        assert_eq!(haplotype.name, "");
    }

    #[rstest]
    fn test_id_alias() {
        let raw: RawHaplotype = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(normalize(raw).id, "abc");
    }

    #[rstest]
    fn test_hex_preferred_over_id() {
        let raw: RawHaplotype = serde_json::from_str(r#"{"hex": "a", "id": "b"}"#).unwrap();
        assert_eq!(normalize(raw).id, "a");
    }

    #[rstest]
    fn test_deletion_against_empty_alignment() {
        let raw: RawHaplotype =
            serde_json::from_str(r#"{"aligned_sequences": [], "diffs": [{"diff": "1del{2}"}]}"#)
                .unwrap();
        assert!(normalize(raw).diffs.is_empty());
    }

    #[rstest]
    fn test_missing_protein_haplotypes() {
        let unit: RawUnit = serde_json::from_str(r#"{"transcript": "ENST1"}"#).unwrap();
        let (haplotypes, sample_ids) = normalize_unit(unit);
        assert!(haplotypes.is_empty());
        assert!(sample_ids.is_empty());
    }
}
