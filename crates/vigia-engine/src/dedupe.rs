//! Latest-version deduplication of multi-version documents.

use std::collections::HashMap;

use vigia_core::model::{DocumentType, Requirement};

/// Collapse the requirement set to one row per logical document, keeping the
/// highest version within each `(title, subject, document_type)` group.
///
/// Opt-in: callers apply this only when the user toggles the
/// latest-version-only view. Output preserves the order in which each group
/// was first seen, so repeated renders do not shuffle rows.
///
/// Version labels are free-text strings and the comparison is plain string
/// ordering, which ranks "2" above "10".
// TODO: product decision pending on numeric-aware version comparison; it
// would change which row wins for multi-digit labels.
pub fn dedupe_latest_version(requirements: Vec<Requirement>) -> Vec<Requirement> {
    let mut index: HashMap<(String, String, DocumentType), usize> = HashMap::new();
    let mut out: Vec<Requirement> = Vec::with_capacity(requirements.len());

    for req in requirements {
        let key = (req.title.clone(), req.subject.id.clone(), req.document_type);
        match index.get(&key) {
            Some(&slot) => {
                if req.version > out[slot].version {
                    out[slot] = req;
                }
            }
            None => {
                index.insert(key, out.len());
                out.push(req);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vigia_core::model::{
        ContractorDocType, RequirementCategory, SourceKind, Subject, SubjectKind, VigencyState,
    };

    fn requirement(id: &str, title: &str, subject_id: &str, version: &str) -> Requirement {
        Requirement {
            id: id.to_string(),
            document_type: DocumentType::Contractor(ContractorDocType::Sctr),
            title: title.to_string(),
            subject: Subject {
                id: subject_id.to_string(),
                name: subject_id.to_string(),
                kind: SubjectKind::Contractor,
            },
            category: RequirementCategory::Personal,
            expiration_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            days_remaining: Some(92),
            vigency_state: VigencyState::Vigente,
            workflow_status: None,
            file_ref: format!("s3://docs/{id}.pdf"),
            source_kind: SourceKind::ContractorDocuments,
            scope_id: "org-1".into(),
            version: version.to_string(),
            uploaded_by: None,
            site: None,
            process: None,
            sub_process: None,
        }
    }

    #[test]
    fn keeps_highest_version_per_group() {
        let deduped = dedupe_latest_version(vec![
            requirement("a", "SCTR - ctr-7", "ctr-7", "1"),
            requirement("b", "SCTR - ctr-7", "ctr-7", "3"),
            requirement("c", "SCTR - ctr-7", "ctr-7", "2"),
        ]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].id, "b");
        assert_eq!(deduped[0].version, "3");
    }

    #[test]
    fn distinct_groups_survive() {
        let deduped = dedupe_latest_version(vec![
            requirement("a", "SCTR - ctr-7", "ctr-7", "1"),
            requirement("b", "SCTR - ctr-8", "ctr-8", "1"),
            requirement("c", "Ficha RUC - ctr-7", "ctr-7", "1"),
        ]);
        assert_eq!(deduped.len(), 3);
    }

    #[test]
    fn preserves_first_seen_group_order() {
        let deduped = dedupe_latest_version(vec![
            requirement("a", "SCTR - ctr-8", "ctr-8", "1"),
            requirement("b", "SCTR - ctr-7", "ctr-7", "1"),
            requirement("c", "SCTR - ctr-8", "ctr-8", "2"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].subject.id, "ctr-8");
        assert_eq!(deduped[0].id, "c");
        assert_eq!(deduped[1].subject.id, "ctr-7");
    }

    #[test]
    fn idempotent() {
        let input = vec![
            requirement("a", "SCTR - ctr-7", "ctr-7", "1"),
            requirement("b", "SCTR - ctr-7", "ctr-7", "2"),
            requirement("c", "SCTR - ctr-8", "ctr-8", "1"),
        ];
        let once = dedupe_latest_version(input);
        let twice = dedupe_latest_version(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn version_ten_loses_to_two_lexicographically() {
        // Documents the shipped string-ordering behavior: "2" > "10" as
        // plain strings, so version "10" is discarded even though it is the
        // numerically latest. See the TODO on dedupe_latest_version.
        let deduped = dedupe_latest_version(vec![
            requirement("a", "SCTR - ctr-7", "ctr-7", "10"),
            requirement("b", "SCTR - ctr-7", "ctr-7", "2"),
        ]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].version, "2");
    }
}
