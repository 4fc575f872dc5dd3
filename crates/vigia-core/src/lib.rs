pub mod category;
pub mod error;
pub mod model;
pub mod source;
pub mod vigency;

pub use category::category_for;
pub use error::{FilterError, NormalizeError};
pub use model::{
    ContractorDocType, DocumentType, OrgDocCategory, Requirement, RequirementCategory, ScopeId,
    SourceKind, Subject, SubjectKind, VigencyState, WorkflowStatus,
};
pub use source::{
    AuthoritativeStatus, ContractorDocRecord, OrgDocRecord, ScopeWorkforce, SourceRecord,
    TrainingEvent, WorkerRecord,
};
pub use vigency::{
    classify_vigency, days_remaining, map_workflow_status, VIGENCY_WARNING_WINDOW_DAYS,
};
