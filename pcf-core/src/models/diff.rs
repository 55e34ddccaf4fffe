///
/// One parsed mutation of a haplotype: a substitution or a deletion at a
/// position of the protein sequence.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    pub pos: u64,
    pub ref_allele: String,
    pub alt: Option<String>,
    pub info: Option<String>,
}

impl Diff {
    /// Info text, or the empty string when the diff carries none.
    pub fn info_str(&self) -> &str {
        self.info.as_deref().unwrap_or_default()
    }
}
