//! Document loading. Failures propagate unchanged to the caller; there is
//! no retry and no fallback.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::EquivError;

/// Read and parse a JSON document from disk.
pub fn load_document(path: &Path) -> Result<Value, EquivError> {
    let data = fs::read_to_string(path).map_err(|e| EquivError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_document(&path.display().to_string(), &data)
}

/// Parse a JSON document from an in-memory string. `source_name` labels the
/// source in error messages.
pub fn parse_document(source_name: &str, input: &str) -> Result<Value, EquivError> {
    serde_json::from_str(input).map_err(|e| EquivError::DocumentParse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}
