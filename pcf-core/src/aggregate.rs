//! Folding haplotypes into multi-allelic rows.
use fxhash::FxHashMap;

use crate::genotype::merge_samples;
use crate::models::{Haplotype, Item, RowKey};

///
/// Rows under construction, keyed by position and reference allele.
///
/// Rows are kept in the order their key was first seen.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    index: FxHashMap<RowKey, usize>,
    items: Vec<Item>,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &RowKey) -> Option<&Item> {
        self.index.get(key).map(|&i| &self.items[i])
    }

    /// The row at `key`, created empty on first access.
    pub fn entry(&mut self, key: RowKey) -> &mut Item {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.items.len();
                self.items.push(Item::new(&key));
                self.index.insert(key, i);
                i
            }
        };
        &mut self.items[i]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

///
/// Fold one haplotype into the row set.
///
pub fn fold_haplotype(rows: &mut RowSet, haplotype: &Haplotype) {
    let prot = haplotype.protein_id();

    for diff in &haplotype.diffs {
        let row = rows.entry(RowKey::from(diff));

        row.prot = prot.to_string();
        row.id = haplotype.id.clone();
        if row.info.is_empty() {
            row.info = diff.info_str().to_string();
        }

        let alt_index = match &diff.alt {
            Some(allele) => match row.genotype_index(allele) {
                Some(index) => index,
                None => {
                    row.alt.push(allele.clone());
                    row.alt.len() as u32
                }
            },
            None => row.alt.len() as u32,
        };

        row.samples = merge_samples(&row.samples, haplotype, alt_index);
    }
}

///
/// Fold an ordered sequence of haplotypes into rows.
///
/// # Returns
/// - one row per distinct (position, reference allele) of all diffs
///
pub fn aggregate(haplotypes: &[Haplotype]) -> RowSet {
    let mut rows = RowSet::new();
    for haplotype in haplotypes {
        fold_haplotype(&mut rows, haplotype);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::parser::parse_diff;

    fn haplotype(name: &str, id: &str, samples: &[(&str, i64)], diffs: &[&str]) -> Haplotype {
        let reference = "MKTGAGLLAQ";
        Haplotype {
            frequency: 0.1,
            samples: samples
                .iter()
                .map(|(s, n)| (s.to_string(), *n))
                .collect::<BTreeMap<_, _>>(),
            aligned_sequences: vec![reference.to_string()],
            diffs: diffs
                .iter()
                .filter_map(|d| parse_diff(d, reference))
                .collect(),
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    fn key(pos: u64, ref_allele: &str) -> RowKey {
        RowKey {
            pos,
            ref_allele: ref_allele.to_string(),
        }
    }

    #[fixture]
    fn haplotypes() -> Vec<Haplotype> {
        vec![
            haplotype("ENSP1:10A>T", "h1", &[("s1", 1)], &["10A>T"]),
            haplotype("ENSP1:10A>C", "h2", &[("s2", 1)], &["10A>C", "3G>R"]),
            haplotype("ENSP1:10A>T", "h3", &[("s1", 1), ("s3", 2)], &["10A>T"]),
        ]
    }

    #[rstest]
    fn test_multi_allelic_row(haplotypes: Vec<Haplotype>) {
        let rows = aggregate(&haplotypes[..2]);
        let row = rows.get(&key(10, "A")).unwrap();

        assert_eq!(row.alt, vec!["T".to_string(), "C".to_string()]);
        assert_eq!(row.samples["s1"], vec![1]);
        assert_eq!(row.samples["s2"], vec![2]);
        assert_eq!(row.prot, "ENSP1");
    }

    #[rstest]
    fn test_one_row_per_key(haplotypes: Vec<Haplotype>) {
        let rows = aggregate(&haplotypes);

        assert_eq!(rows.len(), 2);
        let keys: Vec<RowKey> = rows.iter().map(Item::key).collect();
        assert_eq!(keys, vec![key(10, "A"), key(3, "G")]);
    }

    #[rstest]
    fn test_known_allele_keeps_its_index(haplotypes: Vec<Haplotype>) {
        let rows = aggregate(&haplotypes);
        let row = rows.get(&key(10, "A")).unwrap();

        assert_eq!(row.alt, vec!["T".to_string(), "C".to_string()]);
        assert_eq!(row.samples["s1"], vec![1, 1]);
        assert_eq!(row.samples["s3"], vec![1, 1]);
        assert_eq!(row.samples["s2"], vec![2]);
        assert_eq!(row.id, "h3");
    }

    #[rstest]
    fn test_same_position_different_ref_are_separate_rows() {
        let rows = aggregate(&[
            haplotype("P", "", &[("s1", 1)], &["4A>T"]),
            haplotype("P", "", &[("s1", 1)], &["4AG>T"]),
        ]);
        assert_eq!(rows.len(), 2);
        assert!(rows.get(&key(4, "A")).is_some());
        assert!(rows.get(&key(4, "AG")).is_some());
    }

    #[rstest]
    fn test_first_non_empty_info_is_kept() {
        let rows = aggregate(&[
            haplotype("P", "", &[("s1", 1)], &["5A>T"]),
            haplotype("P", "", &[("s2", 1)], &["5del{3}"]),
            haplotype("P", "", &[("s3", 1)], &["5del{ins}"]),
        ]);

        // reference residue at 5 is G, so the deletions land on their own row
        assert_eq!(rows.get(&key(5, "A")).unwrap().info, "");
        let deletion = rows.get(&key(5, "G")).unwrap();
        assert_eq!(deletion.info, "SVTYPE=DEL;END=8");
        assert_eq!(deletion.alt, vec!["<DEL>".to_string()]);
        assert_eq!(deletion.samples["s3"], vec![1]);
    }

    #[rstest]
    fn test_info_filled_by_later_haplotype() {
        let rows = aggregate(&[
            haplotype("P", "", &[("s1", 1)], &["5G>T"]),
            haplotype("P", "", &[("s2", 1)], &["5del{2}"]),
            haplotype("P", "", &[("s3", 1)], &["5G>A"]),
        ]);
        let row = rows.get(&key(5, "G")).unwrap();

        assert_eq!(row.info, "SVTYPE=DEL;END=7");
        assert_eq!(
            row.alt,
            vec!["T".to_string(), "<DEL>".to_string(), "A".to_string()]
        );
        assert_eq!(row.samples["s3"], vec![3]);
    }

    #[rstest]
    fn test_alt_has_no_duplicates(haplotypes: Vec<Haplotype>) {
        let mut doubled = haplotypes.clone();
        doubled.extend(haplotypes);
        let rows = aggregate(&doubled);

        for row in rows.iter() {
            let mut unique = row.alt.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), row.alt.len());
        }
    }

    #[rstest]
    fn test_aggregation_is_repeatable(haplotypes: Vec<Haplotype>) {
        assert_eq!(aggregate(&haplotypes), aggregate(&haplotypes));
    }

    #[rstest]
    fn test_diff_without_alt_uses_current_length() {
        let mut h = haplotype("P", "", &[("s1", 1)], &["7L>F"]);
        let mut bare = h.clone();
        bare.diffs[0].alt = None;
        h.samples.clear();

        let rows = aggregate(&[h, bare]);
        let row = rows.get(&key(7, "L")).unwrap();
        assert_eq!(row.alt, vec!["F".to_string()]);
        assert_eq!(row.samples["s1"], vec![1]);
    }

    #[rstest]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
    }
}
