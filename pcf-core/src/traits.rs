use crate::errors::Result;
use crate::models::GeneMap;

///
/// Resolves protein or transcript identifiers to the genes they belong to.
///
/// Implementations may block. Any error aborts the conversion that asked.
///
pub trait GeneLookup {
    ///
    /// Look up the genes of `ids`.
    ///
    /// # Returns
    /// - a map from every id that could be resolved to its gene
    ///
    fn lookup_genes(&self, ids: &[String]) -> Result<GeneMap>;
}

