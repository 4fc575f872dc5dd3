//! HTTP backend for the SST administration REST API.

use async_trait::async_trait;
use tracing::info;

use vigia_core::model::ScopeId;
use vigia_core::source::{ContractorDocRecord, OrgDocRecord, ScopeWorkforce};
use vigia_engine::training::OrgFilters;

use crate::source::{DocumentSource, TrainingSource};
use crate::FetchError;

/// REST client for the document and training endpoints.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend for the given base URL.
    ///
    /// `base_url` should be like `http://localhost:8080` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Server {
                status: status.as_u16(),
                body,
            });
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DocumentSource for HttpBackend {
    async fn contractor_documents(
        &self,
        scope: &ScopeId,
    ) -> Result<Vec<ContractorDocRecord>, FetchError> {
        let url = format!("{}/api/scopes/{}/contractor-documents", self.base_url, scope);
        info!(url = %url, "fetching contractor documents");
        let docs: Vec<ContractorDocRecord> = self.get_json(self.client.get(&url)).await?;
        info!(count = docs.len(), "fetched contractor documents");
        Ok(docs)
    }

    async fn org_documents(&self, scope: &ScopeId) -> Result<Vec<OrgDocRecord>, FetchError> {
        let url = format!("{}/api/scopes/{}/org-documents", self.base_url, scope);
        info!(url = %url, "fetching organizational documents");
        let docs: Vec<OrgDocRecord> = self.get_json(self.client.get(&url)).await?;
        info!(count = docs.len(), "fetched organizational documents");
        Ok(docs)
    }
}

#[async_trait]
impl TrainingSource for HttpBackend {
    async fn scope_workforce(
        &self,
        scope: &ScopeId,
        year: i32,
        filters: &OrgFilters,
    ) -> Result<ScopeWorkforce, FetchError> {
        let url = format!("{}/api/scopes/{}/workforce", self.base_url, scope);
        let query = workforce_query(year, filters);

        info!(url = %url, year, "fetching scope workforce");
        let workforce: ScopeWorkforce =
            self.get_json(self.client.get(&url).query(&query)).await?;
        info!(
            workers = workforce.workers.len(),
            total = workforce.total_active_workers,
            "fetched scope workforce"
        );
        Ok(workforce)
    }
}

/// Query pairs for a workforce fetch: the year plus any set facets. Values
/// are passed to `RequestBuilder::query`, which percent-encodes them.
fn workforce_query(year: i32, filters: &OrgFilters) -> Vec<(&'static str, String)> {
    let mut query = vec![("year", year.to_string())];
    for (name, value) in [
        ("unit", &filters.unit),
        ("area", &filters.area),
        ("site", &filters.site),
        ("management_line", &filters.management_line),
    ] {
        if let Some(v) = value {
            query.push((name, v.clone()));
        }
    }
    query
}
