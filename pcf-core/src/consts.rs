//! Constants shared by the parser, the row builder and the writer.

// diff notation

/// Separates the reference and alternate residues of a substitution, e.g. `10A>T`.
pub const SUBSTITUTION_OPERATOR: &str = ">";

/// Marks a deletion, e.g. `5del{3}`.
pub const DELETION_OPERATOR: &str = "del";

/// Symbolic ALT allele written for every deletion.
pub const DELETION_ALLELE: &str = "<DEL>";

// genotypes

/// Genotype value of a chromosome copy carrying the reference allele.
pub const REFERENCE_GENOTYPE: u32 = 0;

/// Number of genotype entries every sample is padded to.
pub const PLOIDY: usize = 2;

// output

pub const ALT_SEPARATOR: &str = ",";
pub const SAMPLE_SEPARATOR: &str = "|";
pub const FIELD_SEPARATOR: &str = "\t";

/// Separates the protein identifier from the rest of a haplotype name.
pub const NAME_SEPARATOR: char = ':';
