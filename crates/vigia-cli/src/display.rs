//! Text table rendering for requirement lists and compliance partitions.

use vigia_core::model::Requirement;
use vigia_engine::training::{AnnualCompliance, CompliancePartition};

/// Render requirements as an aligned text table, one row per requirement.
pub fn requirements_table(requirements: &[Requirement]) -> String {
    if requirements.is_empty() {
        return "no requirements match".to_string();
    }

    let headers = ["title", "type", "category", "vigency", "status", "days", "version"];
    let rows: Vec<[String; 7]> = requirements
        .iter()
        .map(|req| {
            [
                req.title.clone(),
                req.document_type.label().to_string(),
                req.category.as_str().to_string(),
                req.vigency_state.as_str().to_string(),
                req.workflow_status
                    .map(|s| s.as_str().to_string())
                    .unwrap_or_else(|| "-".to_string()),
                req.days_remaining
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                req.version.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 7] = headers.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers.map(String::from), &widths);
    push_row(
        &mut out,
        &widths.map(|w| "-".repeat(w)),
        &widths,
    );
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.pop(); // trailing newline
    out
}

/// Render the annual compliance partition with per-group worker rows.
pub fn compliance_summary(
    merged: &AnnualCompliance,
    partition: &CompliancePartition,
    year: i32,
    threshold: u32,
) -> String {
    let mut out = format!(
        "annual training compliance {year} (threshold: {threshold} certificates)\n\
         active workers: {}   evaluated: {}   meets: {}   does not meet: {}\n",
        merged.total_active_workers,
        merged.workers.len(),
        partition.meets.len(),
        partition.does_not_meet.len(),
    );

    for (label, group) in [
        ("meets", &partition.meets),
        ("does not meet", &partition.does_not_meet),
    ] {
        out.push_str(&format!("\n{label}:\n"));
        if group.is_empty() {
            out.push_str("  (none)\n");
            continue;
        }
        for worker in group {
            out.push_str(&format!(
                "  {} ({}) - {} - {} certificates\n",
                worker.name, worker.document_number, worker.area, worker.certificate_count
            ));
        }
    }

    if !merged.failed_scopes.is_empty() {
        out.push_str(&format!(
            "\nnote: no data for scopes: {}\n",
            merged.failed_scopes.join(", ")
        ));
    }

    out.pop();
    out
}

fn push_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        for _ in cell.chars().count()..*width {
            out.push(' ');
        }
    }
    // Strip padding after the last column.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}
