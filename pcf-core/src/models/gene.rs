use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};

///
/// Gene annotation attached to every row of a protein.
///
/// `length` is the length of the transcript crossed on the way from the
/// protein to its gene, and is unknown when the identifier pointed at a
/// gene directly.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gene {
    pub name: String,
    pub id: String,
    pub length: Option<u64>,
}

/// Genes keyed by the protein (or transcript) identifier they were looked up with.
pub type GeneMap = FxHashMap<String, Gene>;
