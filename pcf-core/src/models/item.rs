use fxhash::FxHashMap;

use crate::models::{Diff, Gene};

/// Genotype indices of one sample in one row, one entry per chromosome copy.
pub type Genotype = Vec<u32>;

/// Genotypes of every sample touching a row.
pub type SampleGenotypes = FxHashMap<String, Genotype>;

///
/// Identity of an output row: a position and the reference allele found there.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey {
    pub pos: u64,
    pub ref_allele: String,
}

impl From<&Diff> for RowKey {
    fn from(diff: &Diff) -> Self {
        RowKey {
            pos: diff.pos,
            ref_allele: diff.ref_allele.clone(),
        }
    }
}

///
/// One output row: every alternate allele and every sample genotype observed
/// at a (position, reference allele) pair.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    pub prot: String,
    pub pos: u64,
    pub id: String,
    pub ref_allele: String,
    pub alt: Vec<String>,
    pub info: String,
    pub samples: SampleGenotypes,
}

impl Item {
    /// An empty row for `key`.
    pub fn new(key: &RowKey) -> Self {
        Item {
            pos: key.pos,
            ref_allele: key.ref_allele.clone(),
            ..Default::default()
        }
    }

    pub fn key(&self) -> RowKey {
        RowKey {
            pos: self.pos,
            ref_allele: self.ref_allele.clone(),
        }
    }

    ///
    /// 1-based genotype index of `alt` in this row, if the allele is known.
    ///
    pub fn genotype_index(&self, alt: &str) -> Option<u32> {
        self.alt
            .iter()
            .position(|a| a == alt)
            .map(|i| (i + 1) as u32)
    }
}

///
/// A finalized row together with the gene of its protein, when genes were looked up.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedItem {
    pub item: Item,
    pub gene: Option<Gene>,
}

impl From<Item> for AnnotatedItem {
    fn from(item: Item) -> Self {
        AnnotatedItem { item, gene: None }
    }
}
