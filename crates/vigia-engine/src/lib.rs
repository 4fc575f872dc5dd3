//! Transformation layer over already-fetched raw records.
//!
//! Every operation here is synchronous and side-effect-free: each takes its
//! input by reference or by value and returns a new collection, so the same
//! raw batch can safely feed multiple filter or aggregation passes.

pub mod dedupe;
pub mod filter;
pub mod normalize;
pub mod training;

pub use dedupe::dedupe_latest_version;
pub use filter::{filter, FilterCriteria};
pub use normalize::{normalize, normalize_batch};
pub use training::{
    merge_scope_results, partition_by_threshold, AnnualCompliance, CompliancePartition,
    OrgFilters, ScopeResult, WorkerComplianceRecord,
};
