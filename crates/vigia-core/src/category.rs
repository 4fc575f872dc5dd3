//! Static document-type → category lookup tables.
//!
//! One fixed table per source kind. Rule logic is deliberately small and
//! enumerated here, not user-configurable at runtime. Types missing from a
//! table fall back to [`RequirementCategory::Operational`].

use crate::model::{ContractorDocType, DocumentType, OrgDocCategory, RequirementCategory};

const CONTRACTOR_CATEGORIES: &[(ContractorDocType, RequirementCategory)] = &[
    (ContractorDocType::Sctr, RequirementCategory::Personal),
    (ContractorDocType::Policy, RequirementCategory::Legal),
    (ContractorDocType::Ruc, RequirementCategory::Legal),
    (ContractorDocType::SstPlan, RequirementCategory::Operational),
    (ContractorDocType::Iso, RequirementCategory::Operational),
];

const ORG_CATEGORIES: &[(OrgDocCategory, RequirementCategory)] = &[
    (OrgDocCategory::SstPolicy, RequirementCategory::Legal),
    (OrgDocCategory::InternalRegulation, RequirementCategory::Legal),
    (OrgDocCategory::Iperc, RequirementCategory::Operational),
    (OrgDocCategory::AnnualPlan, RequirementCategory::Operational),
    (OrgDocCategory::Procedure, RequirementCategory::Operational),
    (OrgDocCategory::Register, RequirementCategory::Personal),
];

/// Category facet for a contractor document type.
pub fn contractor_category(doc_type: ContractorDocType) -> RequirementCategory {
    CONTRACTOR_CATEGORIES
        .iter()
        .find(|(t, _)| *t == doc_type)
        .map(|(_, c)| *c)
        .unwrap_or(RequirementCategory::Operational)
}

/// Category facet for an organizational document category.
pub fn org_category(category: OrgDocCategory) -> RequirementCategory {
    ORG_CATEGORIES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, c)| *c)
        .unwrap_or(RequirementCategory::Operational)
}

/// Category facet for any canonical document-type tag.
pub fn category_for(doc_type: DocumentType) -> RequirementCategory {
    match doc_type {
        DocumentType::Contractor(t) => contractor_category(t),
        DocumentType::Organizational(c) => org_category(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sctr_is_personal() {
        assert_eq!(
            contractor_category(ContractorDocType::Sctr),
            RequirementCategory::Personal
        );
    }

    #[test]
    fn legal_contractor_types() {
        assert_eq!(
            contractor_category(ContractorDocType::Policy),
            RequirementCategory::Legal
        );
        assert_eq!(
            contractor_category(ContractorDocType::Ruc),
            RequirementCategory::Legal
        );
    }

    #[test]
    fn unmapped_contractor_type_defaults_to_operational() {
        // `Other` is intentionally absent from the table.
        assert_eq!(
            contractor_category(ContractorDocType::Other),
            RequirementCategory::Operational
        );
    }

    #[test]
    fn unmapped_org_category_defaults_to_operational() {
        assert_eq!(
            org_category(OrgDocCategory::Others),
            RequirementCategory::Operational
        );
    }

    #[test]
    fn category_for_dispatches_per_source_table() {
        assert_eq!(
            category_for(DocumentType::Contractor(ContractorDocType::Sctr)),
            RequirementCategory::Personal
        );
        assert_eq!(
            category_for(DocumentType::Organizational(OrgDocCategory::SstPolicy)),
            RequirementCategory::Legal
        );
    }
}
