//! # Gene lookup through the Ensembl REST api
//!
//! Protein haplotypes are named after Ensembl translations. This crate finds
//! the gene of each translation by walking the `Parent` references Ensembl
//! returns: translation → transcript → gene.
//!
//! [`EnsemblClient`] implements [`pcf_core::GeneLookup`], so it plugs
//! straight into [`pcf_core::convert_reader`].
pub mod client;
pub mod consts;
pub mod errors;
pub mod lookup;
pub mod utils;

pub use client::{EnsemblClient, EnsemblClientBuilder};
pub use errors::{LookupError, Result};
pub use lookup::{LookupRecord, ObjectType, RecordSource, resolve_gene};
