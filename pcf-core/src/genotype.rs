//! Per-sample genotype accumulation.
//!
//! Every haplotype folded into a row adds one genotype entry per chromosome
//! copy it was observed on, so a sample carrying two different haplotypes at a
//! position ends up heterozygous for their alleles and a sample carrying the
//! same haplotype twice ends up homozygous.
use crate::models::{Haplotype, SampleGenotypes};

///
/// Fold the samples of `haplotype` into the genotypes of a row.
///
/// # Arguments
/// - existing: genotypes of the row before this haplotype
/// - haplotype: the haplotype being folded in
/// - alt_index: 1-based index of the haplotype's allele in the row's ALT list
///
/// # Returns
/// - a new genotype map; every sample with a positive copy count gets
///   `alt_index` appended once per copy, every other sample is carried over
///
pub fn merge_samples(
    existing: &SampleGenotypes,
    haplotype: &Haplotype,
    alt_index: u32,
) -> SampleGenotypes {
    let mut samples = existing.clone();

    for (sample_id, &copies) in &haplotype.samples {
        if copies <= 0 {
            continue;
        }
        let genotype = samples.entry(sample_id.clone()).or_default();
        genotype.extend(std::iter::repeat_n(alt_index, copies as usize));
    }

    samples
}
