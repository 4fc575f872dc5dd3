use anyhow::bail;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};

use vigia_core::model::{RequirementCategory, VigencyState, WorkflowStatus};
use vigia_engine::training::{partition_by_threshold, OrgFilters};
use vigia_engine::{dedupe_latest_version, filter, FilterCriteria};
use vigia_fetch::{fetch_all_documents, fetch_annual_compliance, HttpBackend};

mod display;

#[derive(Parser)]
#[command(name = "vigia", version, about = "SST compliance requirement engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch, classify, and list compliance requirements for a scope.
    Documents {
        #[arg(long, env = "VIGIA_BASE_URL")]
        base_url: String,
        #[arg(long)]
        scope: String,
        /// Collapse to the latest version per logical document.
        #[arg(long)]
        dedupe: bool,
        /// Workflow status filter (e.g. APROBADO).
        #[arg(long)]
        status: Option<String>,
        /// Category filter: personal, operational, or legal.
        #[arg(long)]
        category: Option<String>,
        /// Comma-separated vigency states (vigente, por_vencer, caducado).
        #[arg(long, value_delimiter = ',')]
        vigency: Vec<String>,
        /// Case-insensitive title search.
        #[arg(long)]
        search: Option<String>,
        /// Classification date (YYYY-MM-DD); defaults to the current date.
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Aggregate annual training compliance across scopes.
    Training {
        #[arg(long, env = "VIGIA_BASE_URL")]
        base_url: String,
        /// One or more organizational scopes.
        #[arg(long, required = true)]
        scope: Vec<String>,
        #[arg(long)]
        year: i32,
        /// Minimum certified trainings per worker per year.
        #[arg(long)]
        threshold: u32,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        area: Option<String>,
        #[arg(long)]
        site: Option<String>,
        #[arg(long)]
        management_line: Option<String>,
    },
}

fn parse_status(s: &str) -> anyhow::Result<WorkflowStatus> {
    Ok(match s.to_ascii_uppercase().as_str() {
        "PENDIENTE" => WorkflowStatus::Pendiente,
        "ATRASADO" => WorkflowStatus::Atrasado,
        "POR_APROBAR" => WorkflowStatus::PorAprobar,
        "APROBADO" => WorkflowStatus::Aprobado,
        "OBSERVADO" => WorkflowStatus::Observado,
        _ => bail!("unknown workflow status: {s}"),
    })
}

fn parse_category(s: &str) -> anyhow::Result<RequirementCategory> {
    Ok(match s.to_ascii_lowercase().as_str() {
        "personal" => RequirementCategory::Personal,
        "operational" | "operacional" => RequirementCategory::Operational,
        "legal" => RequirementCategory::Legal,
        _ => bail!("unknown category: {s}"),
    })
}

fn parse_vigency(s: &str) -> anyhow::Result<VigencyState> {
    Ok(match s.to_ascii_lowercase().as_str() {
        "vigente" => VigencyState::Vigente,
        "por_vencer" => VigencyState::PorVencer,
        "caducado" => VigencyState::Caducado,
        "sin_vencimiento" => VigencyState::SinVencimiento,
        _ => bail!("unknown vigency state: {s}"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("vigia v{}", env!("CARGO_PKG_VERSION"));

    match Cli::parse().command {
        Command::Documents {
            base_url,
            scope,
            dedupe,
            status,
            category,
            vigency,
            search,
            today,
        } => {
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            let backend = HttpBackend::new(base_url);
            let batch = fetch_all_documents(&backend, &scope, today).await;

            let mut requirements = batch.requirements;
            if dedupe {
                requirements = dedupe_latest_version(requirements);
            }

            let criteria = FilterCriteria {
                workflow_status: status.as_deref().map(parse_status).transpose()?,
                category: category.as_deref().map(parse_category).transpose()?,
                title_contains: search,
                vigency_states: if vigency.is_empty() {
                    None
                } else {
                    Some(
                        vigency
                            .iter()
                            .map(|s| parse_vigency(s))
                            .collect::<anyhow::Result<Vec<_>>>()?,
                    )
                },
                ..Default::default()
            };
            let rows = filter(&requirements, &criteria)?;

            println!("{}", display::requirements_table(&rows));
            for source in &batch.failed_sources {
                println!("note: source {} returned no data", source.as_str());
            }
        }
        Command::Training {
            base_url,
            scope,
            year,
            threshold,
            unit,
            area,
            site,
            management_line,
        } => {
            let backend = HttpBackend::new(base_url);
            let filters = OrgFilters {
                unit,
                area,
                site,
                management_line,
            };
            let merged = fetch_annual_compliance(&backend, &scope, year, &filters).await;
            let partition = partition_by_threshold(&merged.workers, threshold);
            println!(
                "{}",
                display::compliance_summary(&merged, &partition, year, threshold)
            );
        }
    }

    Ok(())
}
