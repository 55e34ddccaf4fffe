use std::env;

use super::consts::{DEFAULT_ENSEMBL_API, ENSEMBL_API_ENV};

/// Get default Ensembl REST api from environment variable
///
/// # Returns
/// - Ensembl REST api base url, without a trailing slash
pub fn get_default_api() -> String {
    env::var(ENSEMBL_API_ENV)
        .map(|api| api.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_ENSEMBL_API.to_string())
}
