use std::collections::BTreeMap;

use crate::consts::NAME_SEPARATOR;
use crate::models::Diff;

///
/// A set of protein differences observed together in one or more samples.
///
/// `samples` maps a sample id to the number of chromosome copies carrying
/// this haplotype. The first aligned sequence is the reference protein
/// sequence deletions are resolved against.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Haplotype {
    pub frequency: f64,
    pub samples: BTreeMap<String, i64>,
    pub aligned_sequences: Vec<String>,
    pub diffs: Vec<Diff>,
    pub name: String,
    pub id: String,
}

impl Haplotype {
    ///
    /// Protein or transcript identifier, the first `:` separated segment of the name.
    ///
    pub fn protein_id(&self) -> &str {
        self.name.split(NAME_SEPARATOR).next().unwrap_or_default()
    }

    ///
    /// Reference sequence used to resolve deleted residues.
    ///
    pub fn reference_sequence(&self) -> &str {
        self.aligned_sequences
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn haplotype_named(name: &str) -> Haplotype {
        Haplotype {
            frequency: 0.0,
            samples: BTreeMap::new(),
            aligned_sequences: vec![],
            diffs: vec![],
            name: name.to_string(),
            id: String::new(),
        }
    }

    #[rstest]
    #[case("ENSP00000288602:1A>T", "ENSP00000288602")]
    #[case("ENSP00000288602", "ENSP00000288602")]
    #[case("", "")]
    #[case(":REF", "")]
    fn test_protein_id(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(haplotype_named(name).protein_id(), expected);
    }

    #[rstest]
    fn test_reference_sequence_of_empty_alignment() {
        assert_eq!(haplotype_named("P").reference_sequence(), "");
    }
}
