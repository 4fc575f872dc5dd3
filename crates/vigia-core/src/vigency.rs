//! Vigency classification and workflow status mapping.
//!
//! Both functions are pure: "today" is always an explicit parameter so
//! classification is deterministic and reproducible under test. Day
//! arithmetic works on [`NaiveDate`], which is already calendar-day
//! granular, so a document expiring later today still counts as day zero.

use chrono::NaiveDate;

use crate::model::{VigencyState, WorkflowStatus};
use crate::source::AuthoritativeStatus;

/// Days-to-expiry at or below which a dated requirement is `por_vencer`.
pub const VIGENCY_WARNING_WINDOW_DAYS: i64 = 30;

/// Signed days until expiry (negative = overdue), `None` when there is no
/// expiration date.
pub fn days_remaining(expiration: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    expiration.map(|exp| (exp - today).num_days())
}

/// Derive the calendar-based vigency state of a requirement.
///
/// Priority order:
/// 1. no expiration date → `sin_vencimiento`;
/// 2. an authoritative Expired / AboutToExpire / Valid status is trusted
///    over date math (`Pending` is a workflow fact, not a vigency one, and
///    falls through);
/// 3. otherwise bucket by signed days remaining against the warning window.
pub fn classify_vigency(
    expiration: Option<NaiveDate>,
    authoritative: Option<AuthoritativeStatus>,
    today: NaiveDate,
) -> VigencyState {
    let Some(exp) = expiration else {
        return VigencyState::SinVencimiento;
    };

    match authoritative {
        Some(AuthoritativeStatus::Expired) => return VigencyState::Caducado,
        Some(AuthoritativeStatus::AboutToExpire) => return VigencyState::PorVencer,
        Some(AuthoritativeStatus::Valid) => return VigencyState::Vigente,
        Some(AuthoritativeStatus::Pending) | None => {}
    }

    let days = (exp - today).num_days();
    if days < 0 {
        VigencyState::Caducado
    } else if days <= VIGENCY_WARNING_WINDOW_DAYS {
        VigencyState::PorVencer
    } else {
        VigencyState::Vigente
    }
}

/// Derive the coarse workflow status, first match wins.
///
/// Never produces [`WorkflowStatus::Observado`]: that state has no data
/// source yet and exists only in the display legend.
pub fn map_workflow_status(
    authoritative: Option<AuthoritativeStatus>,
    days_remaining: Option<i64>,
) -> Option<WorkflowStatus> {
    match authoritative {
        Some(AuthoritativeStatus::Pending) => Some(WorkflowStatus::Pendiente),
        Some(AuthoritativeStatus::Expired) => Some(WorkflowStatus::Atrasado),
        _ if days_remaining.is_some_and(|d| d < 0) => Some(WorkflowStatus::Atrasado),
        Some(AuthoritativeStatus::AboutToExpire) => Some(WorkflowStatus::PorAprobar),
        Some(AuthoritativeStatus::Valid) => Some(WorkflowStatus::Aprobado),
        None => None,
    }
}
