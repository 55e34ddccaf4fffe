//! Backfilling default genotypes and freezing the rows of a unit.
use crate::aggregate::RowSet;
use crate::consts::{PLOIDY, REFERENCE_GENOTYPE};
use crate::models::{Item, SampleIds};

///
/// Give every sample a genotype of at least [`PLOIDY`] entries in every row.
///
/// Samples that never touched a row become homozygous reference. Shorter
/// genotypes are right-padded with the reference allele; longer ones are
/// left as they are.
///
/// # Arguments
/// - rows: rows built by [`crate::aggregate::aggregate`]
/// - all_sample_ids: every sample seen in the unit
///
/// # Returns
/// - the rows in the order their key was first seen
///
pub fn finalize(rows: RowSet, all_sample_ids: &SampleIds) -> Vec<Item> {
    let mut items = rows.into_items();

    for item in items.iter_mut() {
        for sample_id in all_sample_ids.iter() {
            if !item.samples.contains_key(sample_id) {
                item.samples
                    .insert(sample_id.clone(), vec![REFERENCE_GENOTYPE; PLOIDY]);
            }
        }

        for genotype in item.samples.values_mut() {
            if genotype.len() < PLOIDY {
                genotype.resize(PLOIDY, REFERENCE_GENOTYPE);
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::models::RowKey;

    fn rows_with(genotypes: &[(&str, Vec<u32>)]) -> RowSet {
        let mut rows = RowSet::new();
        let row = rows.entry(RowKey {
            pos: 10,
            ref_allele: "A".to_string(),
        });
        row.alt = vec!["T".to_string(), "C".to_string()];
        for (id, genotype) in genotypes {
            row.samples.insert(id.to_string(), genotype.clone());
        }
        rows
    }

    #[rstest]
    fn test_pads_single_copies() {
        let ids: SampleIds = ["s1", "s2"].into_iter().collect();
        let items = finalize(rows_with(&[("s1", vec![1]), ("s2", vec![2])]), &ids);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].samples["s1"], vec![1, 0]);
        assert_eq!(items[0].samples["s2"], vec![2, 0]);
    }

    #[rstest]
    fn test_absent_sample_is_homozygous_reference() {
        let ids: SampleIds = ["s1", "s4"].into_iter().collect();
        let items = finalize(rows_with(&[("s1", vec![1, 1])]), &ids);

        assert_eq!(items[0].samples["s1"], vec![1, 1]);
        assert_eq!(items[0].samples["s4"], vec![0, 0]);
    }

    #[rstest]
    fn test_long_genotypes_are_not_truncated() {
        let ids: SampleIds = ["s1"].into_iter().collect();
        let items = finalize(rows_with(&[("s1", vec![1, 2, 1])]), &ids);

        assert_eq!(items[0].samples["s1"], vec![1, 2, 1]);
    }

    #[rstest]
    fn test_every_genotype_reaches_ploidy() {
        let ids: SampleIds = ["a", "b", "c"].into_iter().collect();
        let items = finalize(rows_with(&[("b", vec![]), ("z", vec![2])]), &ids);

        assert_eq!(items[0].samples.len(), 4);
        assert!(items[0].samples.values().all(|g| g.len() >= PLOIDY));
        assert_eq!(items[0].samples["z"], vec![2, 0]);
    }
}
