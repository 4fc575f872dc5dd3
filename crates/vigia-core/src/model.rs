//! Canonical compliance requirement model.
//!
//! One `Requirement` per compliance obligation, regardless of which raw
//! source produced it. Derived fields (`days_remaining`, `vigency_state`,
//! `workflow_status`) are pure functions of the canonical fields plus an
//! injected "today"; they are recomputed on every classification pass and
//! never trusted from upstream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Organizational scope (company / contractor unit) that owns a set of
/// requirements or workers.
pub type ScopeId = String;

/// What kind of entity a requirement is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Organization,
    Contractor,
    Worker,
}

impl SubjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organization => "organization",
            Self::Contractor => "contractor",
            Self::Worker => "worker",
        }
    }
}

/// The entity a requirement is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub kind: SubjectKind,
}

/// Document types held by contractors (legal/technical accreditation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractorDocType {
    /// Seguro Complementario de Trabajo de Riesgo.
    #[serde(rename = "SCTR")]
    Sctr,
    #[serde(rename = "POLITICA")]
    Policy,
    /// Registro Único de Contribuyentes.
    #[serde(rename = "RUC")]
    Ruc,
    #[serde(rename = "PLAN_SST")]
    SstPlan,
    #[serde(rename = "ISO")]
    Iso,
    #[serde(rename = "OTRO")]
    Other,
}

impl ContractorDocType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sctr => "SCTR",
            Self::Policy => "Política de seguridad",
            Self::Ruc => "Ficha RUC",
            Self::SstPlan => "Plan anual de SST",
            Self::Iso => "Certificación ISO",
            Self::Other => "Otro documento",
        }
    }
}

/// Category tags for organization-held SST documents. These documents are
/// versioned rather than expiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrgDocCategory {
    #[serde(rename = "POLITICA_SST")]
    SstPolicy,
    #[serde(rename = "REGLAMENTO_INTERNO")]
    InternalRegulation,
    #[serde(rename = "IPERC")]
    Iperc,
    #[serde(rename = "PLAN_ANUAL")]
    AnnualPlan,
    #[serde(rename = "PROCEDIMIENTO")]
    Procedure,
    #[serde(rename = "REGISTRO")]
    Register,
    #[serde(rename = "OTROS")]
    Others,
}

impl OrgDocCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SstPolicy => "Política de SST",
            Self::InternalRegulation => "Reglamento interno",
            Self::Iperc => "Matriz IPERC",
            Self::AnnualPlan => "Plan anual",
            Self::Procedure => "Procedimiento",
            Self::Register => "Registro",
            Self::Others => "Otros",
        }
    }
}

/// Enumerated document-type tag on a canonical requirement. One arm per raw
/// source family; the serialized form is the inner tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentType {
    Contractor(ContractorDocType),
    Organizational(OrgDocCategory),
}

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contractor(t) => t.label(),
            Self::Organizational(c) => c.label(),
        }
    }
}

/// Which raw source produced a requirement. Determines which optional
/// fields are semantically meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    ContractorDocuments,
    OrganizationalDocuments,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContractorDocuments => "contractor_documents",
            Self::OrganizationalDocuments => "organizational_documents",
        }
    }
}

/// Derived facet grouping requirements for dashboard slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Personal,
    Operational,
    Legal,
}

impl RequirementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Operational => "operational",
            Self::Legal => "legal",
        }
    }
}

/// Calendar-based freshness bucket of a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VigencyState {
    /// Valid: more than the warning window away from expiry.
    Vigente,
    /// Expiring soon: within the warning window.
    PorVencer,
    /// Expired.
    Caducado,
    /// No expiration date at all.
    SinVencimiento,
}

impl VigencyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vigente => "vigente",
            Self::PorVencer => "por_vencer",
            Self::Caducado => "caducado",
            Self::SinVencimiento => "sin_vencimiento",
        }
    }
}

/// Coarse lifecycle label describing where a requirement's approval stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStatus {
    Pendiente,
    Atrasado,
    PorAprobar,
    Aprobado,
    /// Advertised in the display legend but produced by no mapper arm:
    /// there is currently no upstream source for "observed" findings.
    /// Kept so wiring one in later is a purely additive change.
    Observado,
}

impl WorkflowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Atrasado => "ATRASADO",
            Self::PorAprobar => "POR_APROBAR",
            Self::Aprobado => "APROBADO",
            Self::Observado => "OBSERVADO",
        }
    }
}

/// Canonical unified record representing one compliance obligation.
///
/// Immutable once constructed by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    pub document_type: DocumentType,
    pub title: String,
    pub subject: Subject,
    pub category: RequirementCategory,
    pub expiration_date: Option<NaiveDate>,
    /// Signed days until expiry (negative = overdue). `None` iff
    /// `expiration_date` is `None`.
    pub days_remaining: Option<i64>,
    pub vigency_state: VigencyState,
    pub workflow_status: Option<WorkflowStatus>,
    /// Opaque locator for the underlying artifact (view/download only).
    pub file_ref: String,
    pub source_kind: SourceKind,
    pub scope_id: ScopeId,
    /// Free-text version label; not guaranteed numeric or zero-padded.
    pub version: String,
    pub uploaded_by: Option<String>,
    pub site: Option<String>,
    pub process: Option<String>,
    pub sub_process: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vigency_state_serializes_to_legend_strings() {
        for (state, expect) in [
            (VigencyState::Vigente, "\"vigente\""),
            (VigencyState::PorVencer, "\"por_vencer\""),
            (VigencyState::Caducado, "\"caducado\""),
            (VigencyState::SinVencimiento, "\"sin_vencimiento\""),
        ] {
            assert_eq!(serde_json::to_string(&state).unwrap(), expect);
            assert_eq!(format!("\"{}\"", state.as_str()), expect);
        }
    }

    #[test]
    fn workflow_status_serializes_to_legend_strings() {
        for (status, expect) in [
            (WorkflowStatus::Pendiente, "\"PENDIENTE\""),
            (WorkflowStatus::Atrasado, "\"ATRASADO\""),
            (WorkflowStatus::PorAprobar, "\"POR_APROBAR\""),
            (WorkflowStatus::Aprobado, "\"APROBADO\""),
            (WorkflowStatus::Observado, "\"OBSERVADO\""),
        ] {
            assert_eq!(serde_json::to_string(&status).unwrap(), expect);
            assert_eq!(format!("\"{}\"", status.as_str()), expect);
        }
    }

    #[test]
    fn document_type_untagged_roundtrip() {
        let contractor = DocumentType::Contractor(ContractorDocType::Sctr);
        let json = serde_json::to_string(&contractor).unwrap();
        assert_eq!(json, "\"SCTR\"");
        assert_eq!(serde_json::from_str::<DocumentType>(&json).unwrap(), contractor);

        let org = DocumentType::Organizational(OrgDocCategory::Iperc);
        let json = serde_json::to_string(&org).unwrap();
        assert_eq!(json, "\"IPERC\"");
        assert_eq!(serde_json::from_str::<DocumentType>(&json).unwrap(), org);
    }
}
