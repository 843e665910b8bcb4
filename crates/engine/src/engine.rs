use std::path::Path;

use serde_json::Value;

use crate::compare::compare;
use crate::config::CompareConfig;
use crate::error::EquivError;
use crate::flatten::flatten;
use crate::loader::load_document;
use crate::model::{EquivResult, RunMeta};

/// Flatten both documents and compare per config. Returns the verdict plus
/// per-key mismatch records and run metadata.
pub fn run(
    config: &CompareConfig,
    left: &Value,
    right: &Value,
) -> Result<EquivResult, EquivError> {
    let left_grouping = flatten(left)?;
    let right_grouping = flatten(right)?;

    let outcome = compare(&left_grouping, &right_grouping, config.tolerance, config.scan);

    Ok(EquivResult {
        meta: RunMeta {
            config_name: config.name.clone(),
            tolerance: config.tolerance,
            scan: config.scan,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary: outcome.summary,
        mismatches: outcome.mismatches,
    })
}

/// Load two documents from disk and report whether they are equivalent.
/// `tolerance` defaults to 3 when not given.
pub fn are_equivalent(
    left: &Path,
    right: &Path,
    tolerance: Option<usize>,
) -> Result<bool, EquivError> {
    let mut config = CompareConfig::default();
    if let Some(t) = tolerance {
        config.tolerance = t;
    }

    let left_doc = load_document(left)?;
    let right_doc = load_document(right)?;

    let result = run(&config, &left_doc, &right_doc)?;
    Ok(result.summary.equivalent)
}
