//! Raw record shapes produced by upstream collaborators.
//!
//! Two structurally different document sources feed the requirement
//! pipeline, modeled as one tagged sum type with an arm per source; each arm
//! carries only the fields that source actually provides. The training
//! source feeds the annual compliance aggregator and is independent of the
//! document pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{ContractorDocType, OrgDocCategory, ScopeId};

/// Authoritative workflow/vigency status carried by a contractor document
/// record, when the upstream system has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthoritativeStatus {
    Pending,
    Expired,
    AboutToExpire,
    Valid,
}

/// A contractor-held legal/technical document, as returned by the
/// contractor-documents collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractorDocRecord {
    pub id: String,
    pub document_type: ContractorDocType,
    pub expiration_date: Option<NaiveDate>,
    pub authoritative_status: Option<AuthoritativeStatus>,
    pub file_ref: String,
    pub owner_contractor_id: String,
    pub owner_contractor_name: Option<String>,
    pub scope_id: ScopeId,
    /// Free-text version label; absent for sources that do not version
    /// contractor documents.
    pub version: Option<String>,
}

/// An organization-held SST document, as returned by the org-documents
/// collaborator. These are versioned, not expiring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgDocRecord {
    pub id: String,
    pub category: OrgDocCategory,
    pub title: String,
    pub file_ref: String,
    pub scope_id: ScopeId,
    pub version: String,
    pub uploaded_by: Option<String>,
    pub site: Option<String>,
    pub process: Option<String>,
    pub sub_process: Option<String>,
}

/// Tagged union over the two raw document sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SourceRecord {
    Contractor(ContractorDocRecord),
    Organizational(OrgDocRecord),
}

/// One completed training for one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEvent {
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: String,
    pub has_certificate: bool,
}

/// One active worker with their training history, as returned by the
/// training collaborator for a scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    pub worker_id: String,
    pub name: String,
    pub document_number: String,
    pub area: String,
    pub trainings: Vec<TrainingEvent>,
}

/// Per-scope workforce snapshot for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeWorkforce {
    pub scope_id: ScopeId,
    pub total_active_workers: u64,
    pub workers: Vec<WorkerRecord>,
}
