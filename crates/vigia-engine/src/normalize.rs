//! Raw record → canonical [`Requirement`] normalization.

use chrono::NaiveDate;
use tracing::warn;

use vigia_core::category::{contractor_category, org_category};
use vigia_core::model::{DocumentType, Requirement, SourceKind, Subject, SubjectKind};
use vigia_core::source::{ContractorDocRecord, OrgDocRecord, SourceRecord};
use vigia_core::vigency::{classify_vigency, days_remaining, map_workflow_status};
use vigia_core::{NormalizeError, WorkflowStatus};

/// Normalize one raw record into a canonical requirement, deriving vigency
/// and workflow status against the supplied `today`.
pub fn normalize(record: SourceRecord, today: NaiveDate) -> Result<Requirement, NormalizeError> {
    match record {
        SourceRecord::Contractor(doc) => normalize_contractor(doc, today),
        SourceRecord::Organizational(doc) => normalize_org(doc),
    }
}

/// Normalize a whole batch. Malformed records are dropped with a warning;
/// a bad record never aborts the batch.
pub fn normalize_batch(records: Vec<SourceRecord>, today: NaiveDate) -> Vec<Requirement> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        match normalize(record, today) {
            Ok(req) => out.push(req),
            Err(err) => warn!(%err, "dropping malformed source record"),
        }
    }
    out
}

fn require(value: &str, field: &'static str) -> Result<(), NormalizeError> {
    if value.trim().is_empty() {
        Err(NormalizeError::MissingField { field })
    } else {
        Ok(())
    }
}

fn normalize_contractor(
    doc: ContractorDocRecord,
    today: NaiveDate,
) -> Result<Requirement, NormalizeError> {
    require(&doc.id, "id")?;
    require(&doc.owner_contractor_id, "owner_contractor_id")?;

    // Display name falls back to the contractor id so the dedupe group key
    // stays stable when the upstream omits the name.
    let owner_name = doc
        .owner_contractor_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| doc.owner_contractor_id.clone());

    let days = days_remaining(doc.expiration_date, today);
    Ok(Requirement {
        id: doc.id,
        document_type: DocumentType::Contractor(doc.document_type),
        title: format!("{} - {}", doc.document_type.label(), owner_name),
        subject: Subject {
            id: doc.owner_contractor_id,
            name: owner_name,
            kind: SubjectKind::Contractor,
        },
        category: contractor_category(doc.document_type),
        expiration_date: doc.expiration_date,
        days_remaining: days,
        vigency_state: classify_vigency(doc.expiration_date, doc.authoritative_status, today),
        workflow_status: map_workflow_status(doc.authoritative_status, days),
        file_ref: doc.file_ref,
        source_kind: SourceKind::ContractorDocuments,
        scope_id: doc.scope_id,
        version: doc.version.unwrap_or_else(|| "1".to_string()),
        uploaded_by: None,
        site: None,
        process: None,
        sub_process: None,
    })
}

fn normalize_org(doc: OrgDocRecord) -> Result<Requirement, NormalizeError> {
    require(&doc.id, "id")?;
    require(&doc.title, "title")?;

    Ok(Requirement {
        id: doc.id,
        document_type: DocumentType::Organizational(doc.category),
        title: doc.title,
        subject: Subject {
            id: doc.scope_id.clone(),
            name: doc.scope_id.clone(),
            kind: SubjectKind::Organization,
        },
        category: org_category(doc.category),
        // Organizational documents are versioned, not expiring.
        expiration_date: None,
        days_remaining: None,
        vigency_state: vigia_core::VigencyState::SinVencimiento,
        // An active organizational document is approved by definition.
        workflow_status: Some(WorkflowStatus::Aprobado),
        file_ref: doc.file_ref,
        source_kind: SourceKind::OrganizationalDocuments,
        scope_id: doc.scope_id,
        version: doc.version,
        uploaded_by: doc.uploaded_by,
        site: doc.site,
        process: doc.process,
        sub_process: doc.sub_process,
    })
}
