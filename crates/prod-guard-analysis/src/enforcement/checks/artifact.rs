//! JSON artifact access shared by the checks.

use std::io::ErrorKind;
use std::path::Path;

use prod_guard_core::errors::CheckError;
use serde_json::Value;

/// Read an artifact the check requires. Absence is `ArtifactMissing`.
pub fn read_required(path: &Path) -> Result<Value, CheckError> {
    read_optional(path)?.ok_or_else(|| CheckError::ArtifactMissing {
        path: path.display().to_string(),
    })
}

/// Read an artifact that may not exist yet.
pub fn read_optional(path: &Path) -> Result<Option<Value>, CheckError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CheckError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| malformed(path, e.to_string()))
}

pub fn malformed(path: &Path, message: impl Into<String>) -> CheckError {
    CheckError::ArtifactMalformed {
        path: path.display().to_string(),
        message: message.into(),
    }
}

/// Numeric field of a JSON object, if present and numeric.
pub fn number_field(value: &Value, field: &str) -> Option<f64> {
    value.get(field).and_then(Value::as_f64)
}

/// Renders a number without a trailing `.0` for whole values.
pub fn display_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// JSON number for a threshold, written as an integer when it is whole.
pub fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_optional(&dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn required_missing_is_artifact_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_required(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CheckError::ArtifactMissing { .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_optional(&path).unwrap_err();
        assert!(matches!(err, CheckError::ArtifactMalformed { .. }));
    }

    #[test]
    fn numbers_display_compactly() {
        assert_eq!(display_number(500.0), "500");
        assert_eq!(display_number(812.5), "812.5");
    }

    #[test]
    fn whole_thresholds_are_written_as_integers() {
        assert_eq!(number_value(5000.0).to_string(), "5000");
        assert_eq!(number_value(2.5).to_string(), "2.5");
    }
}
