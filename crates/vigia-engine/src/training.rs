//! Annual per-worker training compliance aggregation.
//!
//! Reuses the normalize/classify/aggregate pattern of the requirement
//! pipeline over a different raw source: per-worker training events merged
//! across organizational scopes, then partitioned against a policy
//! threshold. The partition is a pure function of the threshold and is
//! recomputed on every call; nothing here caches against a stale threshold.

use serde::{Deserialize, Serialize};
use tracing::warn;

use vigia_core::model::ScopeId;
use vigia_core::source::{ScopeWorkforce, TrainingEvent};

/// Optional organizational facets restricting which workers a scope fetch
/// returns. All-`None` means the whole scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgFilters {
    pub unit: Option<String>,
    pub area: Option<String>,
    pub site: Option<String>,
    pub management_line: Option<String>,
}

/// One worker's compliance picture for a target calendar year. Constructed
/// fresh per aggregation request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerComplianceRecord {
    pub worker_id: String,
    pub name: String,
    pub document_number: String,
    pub area: String,
    /// Distinct certified trainings completed within the target year.
    pub certificate_count: u32,
    /// The worker's trainings within the target year, in source order.
    pub trainings: Vec<TrainingEvent>,
}

/// Outcome of fetching one scope. Partial failure is part of the type so
/// the fan-in step's error policy stays visible in signatures.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeResult {
    Fetched(ScopeWorkforce),
    Failed(ScopeId),
}

/// Merged multi-scope aggregation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualCompliance {
    pub total_active_workers: u64,
    /// Insertion order: scope order, then worker order within each scope.
    pub workers: Vec<WorkerComplianceRecord>,
    /// Scopes that failed to fetch and contributed nothing.
    pub failed_scopes: Vec<ScopeId>,
}

/// Threshold partition of the merged worker set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompliancePartition {
    pub meets: Vec<WorkerComplianceRecord>,
    pub does_not_meet: Vec<WorkerComplianceRecord>,
}

fn in_year(event: &TrainingEvent, year: i32) -> bool {
    use chrono::Datelike;
    event.date.year() == year
}

/// Build per-worker compliance records for one scope and target year.
pub fn build_compliance_records(
    workforce: &ScopeWorkforce,
    year: i32,
) -> Vec<WorkerComplianceRecord> {
    workforce
        .workers
        .iter()
        .map(|worker| {
            let trainings: Vec<TrainingEvent> = worker
                .trainings
                .iter()
                .filter(|t| in_year(t, year))
                .cloned()
                .collect();
            let certificate_count = trainings.iter().filter(|t| t.has_certificate).count() as u32;
            WorkerComplianceRecord {
                worker_id: worker.worker_id.clone(),
                name: worker.name.clone(),
                document_number: worker.document_number.clone(),
                area: worker.area.clone(),
                certificate_count,
                trainings,
            }
        })
        .collect()
}

/// Fold per-scope fetch outcomes into one merged result. A failed scope
/// contributes an empty slice and is reported in `failed_scopes`; it never
/// fails the aggregation.
pub fn merge_scope_results(results: Vec<ScopeResult>, year: i32) -> AnnualCompliance {
    let mut merged = AnnualCompliance {
        total_active_workers: 0,
        workers: Vec::new(),
        failed_scopes: Vec::new(),
    };

    for result in results {
        match result {
            ScopeResult::Fetched(workforce) => {
                merged.total_active_workers += workforce.total_active_workers;
                merged.workers.extend(build_compliance_records(&workforce, year));
            }
            ScopeResult::Failed(scope_id) => {
                warn!(%scope_id, "scope fetch failed; contributing empty result");
                merged.failed_scopes.push(scope_id);
            }
        }
    }

    merged
}

/// Partition workers into meets / does-not-meet against the certificate
/// threshold. Pure in `threshold`; call again whenever it changes.
pub fn partition_by_threshold(
    workers: &[WorkerComplianceRecord],
    threshold: u32,
) -> CompliancePartition {
    let (meets, does_not_meet) = workers
        .iter()
        .cloned()
        .partition(|w| w.certificate_count >= threshold);
    CompliancePartition {
        meets,
        does_not_meet,
    }
}
