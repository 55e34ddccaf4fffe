//! Constants for the Ensembl REST client.

/// Environment variable name for setting the Ensembl REST endpoint.
///
/// When set, this overrides [`DEFAULT_ENSEMBL_API`].
///
/// # Example
///
/// ```bash
/// export ENSEMBL_REST_API=https://grch37.rest.ensembl.org
/// ```
pub const ENSEMBL_API_ENV: &str = "ENSEMBL_REST_API";

pub const DEFAULT_ENSEMBL_API: &str = "https://rest.ensembl.org";

/// Path of the identifier lookup endpoint, both for `GET <id>` and batched `POST`.
pub const LOOKUP_ENDPOINT: &str = "lookup/id";

/// Largest number of identifiers Ensembl accepts in one `POST lookup/id`.
pub const MAX_POST_IDS: usize = 1000;

/// Longest parent chain followed from a translation before giving up.
///
/// A well formed chain is translation → transcript → gene.
pub const MAX_PARENT_DEPTH: usize = 8;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
