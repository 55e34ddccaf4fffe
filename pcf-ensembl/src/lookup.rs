//! Walking Ensembl parent references from a translation up to its gene.
use fxhash::FxHashSet;
use log::debug;
use serde::Deserialize;

use pcf_core::Gene;

use crate::consts::MAX_PARENT_DEPTH;
use crate::errors::{LookupError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ObjectType {
    Translation,
    Transcript,
    Gene,
    #[default]
    #[serde(other)]
    Other,
}

///
/// The fields of an Ensembl `lookup/id` response this crate uses.
///
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LookupRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object_type: ObjectType,
    #[serde(rename = "Parent", default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Anything able to fetch a single lookup record by identifier.
pub trait RecordSource {
    fn fetch_record(&self, id: &str) -> Result<LookupRecord>;
}

///
/// Follow parent references from `record` until a gene is reached.
///
/// The length of the last transcript crossed becomes the gene length. Chains
/// longer than [`MAX_PARENT_DEPTH`] or visiting an identifier twice are errors.
///
pub fn resolve_gene<S: RecordSource + ?Sized>(record: LookupRecord, source: &S) -> Result<Gene> {
    let start = record.id.clone();
    let mut record = record;
    let mut length = None;
    let mut visited = FxHashSet::default();
    visited.insert(record.id.clone());

    for _ in 0..=MAX_PARENT_DEPTH {
        match record.object_type {
            ObjectType::Gene => {
                let name = record.display_name.unwrap_or_else(|| record.id.clone());
                return Ok(Gene {
                    name,
                    id: record.id,
                    length,
                });
            }
            ObjectType::Transcript => length = record.length,
            ObjectType::Translation | ObjectType::Other => {}
        }

        let parent = record
            .parent
            .ok_or_else(|| LookupError::MissingParent(record.id.clone()))?;
        if !visited.insert(parent.clone()) {
            return Err(LookupError::CyclicParent(start));
        }

        debug!("{} -> {}", record.id, parent);
        record = source.fetch_record(&parent)?;
    }

    Err(LookupError::ChainTooDeep {
        id: start,
        depth: MAX_PARENT_DEPTH,
    })
}
