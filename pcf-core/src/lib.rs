//! # Protein haplotypes to VCF-style rows
//!
//! This crate turns protein haplotype records, as written by a variant
//! annotator, into tab separated variant rows:
//!
//! - [`parser`] reads the compact mutation notation (`10A>T`, `5del{3}`)
//! - [`normalize`] builds [`Haplotype`]s from raw JSON records
//! - [`aggregate`] folds haplotypes into one multi-allelic row per
//!   (position, reference allele)
//! - [`genotype`] accumulates per-sample genotype indices while folding
//! - [`materialize`] pads genotypes and freezes the rows
//! - [`writer`] emits the rows under a fixed header
//!
//! ## Quick Start
//!
//! ```rust
//! use pcf_core::aggregate::aggregate;
//! use pcf_core::materialize::finalize;
//! use pcf_core::normalize::{RawUnit, normalize_unit};
//!
//! let unit: RawUnit = serde_json::from_str(r#"{"protein_haplotypes": [
//!     {"samples": {"s1": 1}, "diffs": [{"diff": "10A>T"}], "name": "ENSP1:10A>T"},
//!     {"samples": {"s2": 1}, "diffs": [{"diff": "10A>C"}], "name": "ENSP1:10A>C"}
//! ]}"#).unwrap();
//!
//! let (haplotypes, sample_ids) = normalize_unit(unit);
//! let items = finalize(aggregate(&haplotypes), &sample_ids);
//!
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].alt, vec!["T", "C"]);
//! assert_eq!(items[0].samples["s2"], vec![2, 0]);
//! ```
pub mod aggregate;
pub mod consts;
pub mod convert;
pub mod errors;
pub mod genotype;
pub mod materialize;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod traits;
pub mod utils;
pub mod writer;

// re-expose core functions
pub use aggregate::{RowSet, aggregate};
pub use convert::{ConversionSummary, ConvertedUnit, InputFormat, convert_reader, convert_unit};
pub use errors::{PcfError, Result};
pub use materialize::finalize;
pub use models::{AnnotatedItem, Diff, Gene, GeneMap, Haplotype, Item, RowKey, SampleIds};
pub use normalize::{RawUnit, normalize, normalize_unit};
pub use parser::parse_diff;
pub use traits::GeneLookup;
pub use writer::{Header, PcfWriter};
