pub mod diff;
pub mod gene;
pub mod haplotype;
pub mod item;
pub mod sample_ids;

// re-export for cleaner imports
pub use self::diff::Diff;
pub use self::gene::{Gene, GeneMap};
pub use self::haplotype::Haplotype;
pub use self::item::{AnnotatedItem, Genotype, Item, RowKey, SampleGenotypes};
pub use self::sample_ids::SampleIds;
