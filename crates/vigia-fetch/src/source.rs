//! Collaborator traits and concurrent joins.

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::join_all;
use tracing::warn;

use vigia_core::model::{Requirement, ScopeId, SourceKind};
use vigia_core::source::{ContractorDocRecord, OrgDocRecord, ScopeWorkforce, SourceRecord};
use vigia_engine::normalize::normalize_batch;
use vigia_engine::training::{merge_scope_results, AnnualCompliance, OrgFilters, ScopeResult};

use crate::FetchError;

/// Provider of the two raw document sources for a scope.
#[async_trait]
pub trait DocumentSource {
    async fn contractor_documents(
        &self,
        scope: &ScopeId,
    ) -> Result<Vec<ContractorDocRecord>, FetchError>;

    async fn org_documents(&self, scope: &ScopeId) -> Result<Vec<OrgDocRecord>, FetchError>;
}

/// Provider of per-scope workforce snapshots for a calendar year.
#[async_trait]
pub trait TrainingSource {
    async fn scope_workforce(
        &self,
        scope: &ScopeId,
        year: i32,
        filters: &OrgFilters,
    ) -> Result<ScopeWorkforce, FetchError>;
}

/// Normalized result of fetching both document sources for a scope.
///
/// A failed source contributes nothing and is listed in `failed_sources`;
/// the surviving source still renders, so a partial compliance view beats
/// a hard failure banner.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentBatch {
    pub requirements: Vec<Requirement>,
    pub failed_sources: Vec<SourceKind>,
}

/// Fetch contractor and organizational documents concurrently, then
/// normalize and classify against `today`. Neither source depends on the
/// other, so a failure in one never blocks or invalidates the other.
pub async fn fetch_all_documents<S>(
    source: &S,
    scope: &ScopeId,
    today: NaiveDate,
) -> DocumentBatch
where
    S: DocumentSource + Sync,
{
    let (contractor, org) = tokio::join!(
        source.contractor_documents(scope),
        source.org_documents(scope),
    );

    let mut records: Vec<SourceRecord> = Vec::new();
    let mut failed_sources = Vec::new();

    match contractor {
        Ok(docs) => records.extend(docs.into_iter().map(SourceRecord::Contractor)),
        Err(err) => {
            warn!(%scope, %err, "contractor document source failed");
            failed_sources.push(SourceKind::ContractorDocuments);
        }
    }
    match org {
        Ok(docs) => records.extend(docs.into_iter().map(SourceRecord::Organizational)),
        Err(err) => {
            warn!(%scope, %err, "organizational document source failed");
            failed_sources.push(SourceKind::OrganizationalDocuments);
        }
    }

    DocumentBatch {
        requirements: normalize_batch(records, today),
        failed_sources,
    }
}

/// Fan out one workforce fetch per scope, then fold the outcomes into a
/// merged annual compliance result. A failed scope becomes
/// [`ScopeResult::Failed`]; no error propagates to the caller.
pub async fn fetch_annual_compliance<S>(
    source: &S,
    scopes: &[ScopeId],
    year: i32,
    filters: &OrgFilters,
) -> AnnualCompliance
where
    S: TrainingSource + Sync,
{
    let fetches = scopes.iter().map(|scope| async move {
        match source.scope_workforce(scope, year, filters).await {
            Ok(workforce) => ScopeResult::Fetched(workforce),
            Err(err) => {
                warn!(%scope, %err, "workforce fetch failed");
                ScopeResult::Failed(scope.clone())
            }
        }
    });

    merge_scope_results(join_all(fetches).await, year)
}
