//! Blocking client for the Ensembl REST `lookup/id` endpoint.
use std::cell::RefCell;
use std::time::Duration;

use fxhash::{FxHashMap, FxHashSet};
use log::{debug, info};

use pcf_core::{GeneLookup, GeneMap, PcfError};

use crate::consts::{DEFAULT_TIMEOUT_SECS, LOOKUP_ENDPOINT, MAX_POST_IDS};
use crate::errors::{LookupError, Result};
use crate::lookup::{LookupRecord, RecordSource, resolve_gene};
use crate::utils::get_default_api;

/// Builder for constructing an [`EnsemblClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use pcf_ensembl::client::EnsemblClient;
///
/// let client = EnsemblClient::builder()
///     .with_api("https://grch37.rest.ensembl.org".to_string())
///     .with_timeout(Duration::from_secs(10))
///     .finish();
/// ```
#[derive(Default)]
pub struct EnsemblClientBuilder {
    api: Option<String>,
    timeout: Option<Duration>,
}

impl EnsemblClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base url of the REST api.
    pub fn with_api(mut self, api: String) -> Self {
        self.api = Some(api);
        self
    }

    /// Sets the timeout of every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Consumes the builder and creates an EnsemblClient.
    pub fn finish(self) -> EnsemblClient {
        let api = self
            .api
            .map(|api| api.trim_end_matches('/').to_string())
            .unwrap_or_else(get_default_api);
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        EnsemblClient {
            api,
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            genes: RefCell::new(GeneMap::default()),
        }
    }
}

///
/// Resolves Ensembl translation (and transcript) identifiers to genes.
///
/// Identifiers are first fetched in batches, then each record's parent chain
/// is walked one request at a time. Resolved genes are kept for the lifetime
/// of the client, so an identifier is only ever resolved once.
///
pub struct EnsemblClient {
    /// Ensembl REST api base url
    pub api: String,
    agent: ureq::Agent,
    genes: RefCell<GeneMap>,
}

impl EnsemblClient {
    pub fn builder() -> EnsemblClientBuilder {
        EnsemblClientBuilder::default()
    }

    fn lookup_url(&self) -> String {
        format!("{}/{}", self.api, LOOKUP_ENDPOINT)
    }

    fn read_body(
        &self,
        url: &str,
        response: std::result::Result<ureq::Response, ureq::Error>,
    ) -> Result<String> {
        match response {
            Ok(response) => Ok(response.into_string()?),
            Err(ureq::Error::Status(code, _)) => Err(LookupError::Status {
                code,
                url: url.to_string(),
            }),
            Err(e) => Err(LookupError::Request {
                url: url.to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Fetch one record with `GET lookup/id/<id>`.
    pub fn fetch_by_id(&self, id: &str) -> Result<LookupRecord> {
        let url = format!("{}/{}", self.lookup_url(), id);
        let response = self
            .agent
            .get(&url)
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .call();

        let body = self.read_body(&url, response)?;
        Ok(serde_json::from_str(&body)?)
    }

    ///
    /// Fetch many records with `POST lookup/id`, at most [`MAX_POST_IDS`] per request.
    ///
    /// # Returns
    /// - every requested id mapped to its record, or `None` when Ensembl does not know it
    ///
    pub fn fetch_by_ids(&self, ids: &[String]) -> Result<FxHashMap<String, Option<LookupRecord>>> {
        let url = self.lookup_url();
        let mut records = FxHashMap::default();

        for chunk in ids.chunks(MAX_POST_IDS) {
            let body = serde_json::json!({ "ids": chunk }).to_string();
            let response = self
                .agent
                .post(&url)
                .set("Content-Type", "application/json")
                .set("Accept", "application/json")
                .send_string(&body);

            let body = self.read_body(&url, response)?;
            let chunk_records: FxHashMap<String, Option<LookupRecord>> =
                serde_json::from_str(&body)?;
            records.extend(chunk_records);
        }

        Ok(records)
    }

    ///
    /// Resolve the gene of every identifier in `ids`.
    ///
    /// Fails if any identifier is unknown or its parent chain does not end in a gene.
    ///
    pub fn genes_by_ids(&self, ids: &[String]) -> Result<GeneMap> {
        let missing: Vec<String> = {
            let genes = self.genes.borrow();
            let mut seen = FxHashSet::default();
            ids.iter()
                .filter(|id| !genes.contains_key(*id) && seen.insert(id.as_str()))
                .cloned()
                .collect()
        };

        if !missing.is_empty() {
            info!("Resolving {} identifiers against {}", missing.len(), self.api);
            let records = self.fetch_by_ids(&missing)?;
            let resolved = resolve_records(&missing, records, self)?;
            self.genes.borrow_mut().extend(resolved);
        }

        let genes = self.genes.borrow();
        Ok(ids
            .iter()
            .filter_map(|id| genes.get(id).map(|gene| (id.clone(), gene.clone())))
            .collect())
    }
}

///
/// Resolve the gene of every id in `ids` from a batch lookup response, walking
/// parents through `source`.
///
/// An id mapped to `null`, or absent from the response, is an error.
///
fn resolve_records<S: RecordSource + ?Sized>(
    ids: &[String],
    mut records: FxHashMap<String, Option<LookupRecord>>,
    source: &S,
) -> Result<GeneMap> {
    let mut genes = GeneMap::default();
    for id in ids {
        let record = records
            .remove(id)
            .flatten()
            .ok_or_else(|| LookupError::NotFound(id.clone()))?;
        let gene = resolve_gene(record, source)?;
        debug!("{} belongs to {} ({})", id, gene.name, gene.id);
        genes.insert(id.clone(), gene);
    }
    Ok(genes)
}

impl RecordSource for EnsemblClient {
    fn fetch_record(&self, id: &str) -> Result<LookupRecord> {
        self.fetch_by_id(id)
    }
}

impl GeneLookup for EnsemblClient {
    fn lookup_genes(&self, ids: &[String]) -> pcf_core::Result<GeneMap> {
        self.genes_by_ids(ids)
            .map_err(|e| PcfError::GeneLookup(Box::new(e)))
    }
}
