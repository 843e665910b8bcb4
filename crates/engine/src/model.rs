use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::config::ScanMode;

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Lowercase key name → set of lowercase canonical values observed under
/// that key anywhere in the document. Nesting position is deliberately
/// discarded: a key appearing at several depths accumulates all its values
/// into the same entry. Comparison is bag-of-(key, value), not tree diff.
pub type Grouping = BTreeMap<String, BTreeSet<String>>;

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// A key whose value-sets differ between the two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub key: String,
    pub left: BTreeSet<String>,
    pub right: BTreeSet<String>,
}

// ---------------------------------------------------------------------------
// Comparison output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CompareSummary {
    pub equivalent: bool,
    pub total_differences: usize,
    pub keys_compared: usize,
    /// True when a short-circuit scan stopped before visiting every key,
    /// in which case `total_differences` undercounts the true total.
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareOutcome {
    pub summary: CompareSummary,
    pub mismatches: Vec<Mismatch>,
}

// ---------------------------------------------------------------------------
// Run output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub config_name: String,
    pub tolerance: usize,
    pub scan: ScanMode,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EquivResult {
    pub meta: RunMeta,
    pub summary: CompareSummary,
    pub mismatches: Vec<Mismatch>,
}
