//! Faceted filtering over the requirement set.
//!
//! `FilterCriteria` is a struct of independent, all-optional predicates so
//! that "no filter" is an explicit, type-checked state rather than an
//! empty-string convention. All predicates are ANDed; an unset criterion
//! always passes.

use serde::{Deserialize, Serialize};

use vigia_core::model::{
    DocumentType, Requirement, RequirementCategory, ScopeId, SubjectKind, VigencyState,
    WorkflowStatus,
};
use vigia_core::FilterError;

/// A conjunction of independent facet predicates. `None` means "no filter
/// on this facet".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub scope_id: Option<ScopeId>,
    pub workflow_status: Option<WorkflowStatus>,
    pub category: Option<RequirementCategory>,
    pub document_type: Option<DocumentType>,
    pub subject_kind: Option<SubjectKind>,
    /// Exact match on the site facet.
    pub site: Option<String>,
    /// Case-insensitive substring matches.
    pub process_contains: Option<String>,
    pub sub_process_contains: Option<String>,
    pub title_contains: Option<String>,
    /// Membership over the dated vigency states only. Leaving this unset
    /// passes everything, including `sin_vencimiento`.
    pub vigency_states: Option<Vec<VigencyState>>,
}

impl FilterCriteria {
    /// Reject malformed criteria up front; no partial filtering happens.
    fn validate(&self) -> Result<(), FilterError> {
        if let Some(states) = &self.vigency_states {
            if states.is_empty() {
                return Err(FilterError::InvalidCriteria(
                    "vigency membership filter is empty".into(),
                ));
            }
            if states.contains(&VigencyState::SinVencimiento) {
                return Err(FilterError::InvalidCriteria(
                    "sin_vencimiento is not a dated vigency state; omit the filter instead".into(),
                ));
            }
        }
        for (name, pattern) in [
            ("process", &self.process_contains),
            ("sub_process", &self.sub_process_contains),
            ("title", &self.title_contains),
        ] {
            if let Some(p) = pattern {
                if p.trim().is_empty() {
                    return Err(FilterError::InvalidCriteria(format!(
                        "{name} substring pattern is empty"
                    )));
                }
            }
        }
        Ok(())
    }

    fn matches(&self, req: &Requirement) -> bool {
        matches_eq(&self.scope_id, &req.scope_id)
            && matches_opt_eq(&self.workflow_status, req.workflow_status.as_ref())
            && matches_eq(&self.category, &req.category)
            && matches_eq(&self.document_type, &req.document_type)
            && matches_eq(&self.subject_kind, &req.subject.kind)
            && matches_opt_eq(&self.site, req.site.as_ref())
            && matches_contains(&self.process_contains, req.process.as_deref())
            && matches_contains(&self.sub_process_contains, req.sub_process.as_deref())
            && matches_contains(&self.title_contains, Some(&req.title))
            && self
                .vigency_states
                .as_ref()
                .is_none_or(|states| states.contains(&req.vigency_state))
    }
}

/// Unset criterion passes; otherwise exact equality.
fn matches_eq<T: PartialEq>(criterion: &Option<T>, value: &T) -> bool {
    criterion.as_ref().is_none_or(|want| want == value)
}

/// Unset criterion passes; a `None` facet value fails any positive filter.
fn matches_opt_eq<T: PartialEq>(criterion: &Option<T>, value: Option<&T>) -> bool {
    criterion.as_ref().is_none_or(|want| value == Some(want))
}

fn matches_contains(criterion: &Option<String>, value: Option<&str>) -> bool {
    criterion.as_ref().is_none_or(|needle| {
        value.is_some_and(|hay| hay.to_lowercase().contains(&needle.to_lowercase()))
    })
}

/// Apply the conjunction of predicates over the requirement set, returning a
/// new vector. O(n); no index structures at this scale.
pub fn filter(
    requirements: &[Requirement],
    criteria: &FilterCriteria,
) -> Result<Vec<Requirement>, FilterError> {
    criteria.validate()?;
    Ok(requirements
        .iter()
        .filter(|req| criteria.matches(req))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vigia_core::model::{ContractorDocType, OrgDocCategory, SourceKind, Subject};

    fn requirement(id: &str) -> Requirement {
        Requirement {
            id: id.to_string(),
            document_type: DocumentType::Contractor(ContractorDocType::Sctr),
            title: format!("SCTR - ctr-{id}"),
            subject: Subject {
                id: format!("ctr-{id}"),
                name: format!("ctr-{id}"),
                kind: SubjectKind::Contractor,
            },
            category: RequirementCategory::Personal,
            expiration_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            days_remaining: Some(92),
            vigency_state: VigencyState::Vigente,
            workflow_status: Some(WorkflowStatus::Aprobado),
            file_ref: format!("s3://docs/{id}.pdf"),
            source_kind: SourceKind::ContractorDocuments,
            scope_id: "org-1".into(),
            version: "1".into(),
            uploaded_by: None,
            site: None,
            process: None,
            sub_process: None,
        }
    }

    fn sample_set() -> Vec<Requirement> {
        let mut a = requirement("a");
        a.site = Some("Planta Norte".into());
        a.process = Some("Mantenimiento eléctrico".into());

        let mut b = requirement("b");
        b.category = RequirementCategory::Legal;
        b.vigency_state = VigencyState::Caducado;
        b.workflow_status = Some(WorkflowStatus::Atrasado);
        b.scope_id = "org-2".into();

        let mut c = requirement("c");
        c.document_type = DocumentType::Organizational(OrgDocCategory::Iperc);
        c.subject.kind = SubjectKind::Organization;
        c.vigency_state = VigencyState::SinVencimiento;
        c.workflow_status = None;

        vec![a, b, c]
    }

    #[test]
    fn empty_criteria_is_identity() {
        let set = sample_set();
        let filtered = filter(&set, &FilterCriteria::default()).unwrap();
        assert_eq!(filtered, set);
    }

    #[test]
    fn exact_match_facets() {
        let set = sample_set();
        let by_scope = filter(
            &set,
            &FilterCriteria {
                scope_id: Some("org-2".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(by_scope.len(), 1);
        assert_eq!(by_scope[0].id, "b");

        let by_kind = filter(
            &set,
            &FilterCriteria {
                subject_kind: Some(SubjectKind::Organization),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(by_kind.len(), 1);
        assert_eq!(by_kind[0].id, "c");
    }

    #[test]
    fn null_facet_fails_positive_filter() {
        let set = sample_set();
        // Only "a" carries a site; rows with site = None must not match.
        let by_site = filter(
            &set,
            &FilterCriteria {
                site: Some("Planta Norte".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(by_site.len(), 1);
        assert_eq!(by_site[0].id, "a");

        // "c" has no workflow status and must not match a status filter.
        let by_status = filter(
            &set,
            &FilterCriteria {
                workflow_status: Some(WorkflowStatus::Aprobado),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(by_status.iter().all(|r| r.id != "c"));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let set = sample_set();
        let found = filter(
            &set,
            &FilterCriteria {
                process_contains: Some("ELÉCTRICO".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a");
    }

    #[test]
    fn vigency_membership_excludes_undated_rows() {
        let set = sample_set();
        let dated = filter(
            &set,
            &FilterCriteria {
                vigency_states: Some(vec![VigencyState::Vigente, VigencyState::Caducado]),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(dated.len(), 2);
        assert!(dated.iter().all(|r| r.id != "c"));
    }

    #[test]
    fn absent_vigency_filter_passes_sin_vencimiento() {
        let set = sample_set();
        let all = filter(&set, &FilterCriteria::default()).unwrap();
        assert!(all.iter().any(|r| r.vigency_state == VigencyState::SinVencimiento));
    }

    #[test]
    fn conjunction_composes_order_independently() {
        let set = sample_set();
        let c1 = FilterCriteria {
            category: Some(RequirementCategory::Legal),
            ..Default::default()
        };
        let c2 = FilterCriteria {
            scope_id: Some("org-2".into()),
            ..Default::default()
        };
        let combined = FilterCriteria {
            category: Some(RequirementCategory::Legal),
            scope_id: Some("org-2".into()),
            ..Default::default()
        };

        let sequential = filter(&filter(&set, &c1).unwrap(), &c2).unwrap();
        let reversed = filter(&filter(&set, &c2).unwrap(), &c1).unwrap();
        let joint = filter(&set, &combined).unwrap();
        assert_eq!(sequential, joint);
        assert_eq!(reversed, joint);
    }

    #[test]
    fn sin_vencimiento_membership_is_invalid() {
        let err = filter(
            &sample_set(),
            &FilterCriteria {
                vigency_states: Some(vec![VigencyState::SinVencimiento]),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, FilterError::InvalidCriteria(_)));
    }

    #[test]
    fn empty_patterns_are_invalid() {
        for criteria in [
            FilterCriteria {
                vigency_states: Some(vec![]),
                ..Default::default()
            },
            FilterCriteria {
                title_contains: Some("   ".into()),
                ..Default::default()
            },
        ] {
            assert!(filter(&sample_set(), &criteria).is_err());
        }
    }
}
