//! Remediation actions: "set field F of JSON artifact P to value V".

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use prod_guard_core::errors::RemediationError;
use serde_json::Value;

use crate::enforcement::checks::CheckId;

/// A self-contained fix for exactly the artifact its check inspected.
///
/// Applying it is idempotent: the rewritten file is pretty-printed JSON with
/// a trailing newline, so a second application yields identical bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Remediation {
    check_id: CheckId,
    path: PathBuf,
    field: String,
    value: Value,
}

impl Remediation {
    pub fn set_field(
        check_id: CheckId,
        path: PathBuf,
        field: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            check_id,
            path,
            field: field.into(),
            value,
        }
    }

    pub fn check_id(&self) -> CheckId {
        self.check_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn describe(&self) -> String {
        format!("set {} to {} in {}", self.field, self.value, self.path.display())
    }

    pub fn apply(&self) -> Result<(), RemediationError> {
        let content = fs::read_to_string(&self.path).map_err(|e| RemediationError::Read {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut doc: Value =
            serde_json::from_str(&content).map_err(|e| RemediationError::Malformed {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        let Some(object) = doc.as_object_mut() else {
            return Err(RemediationError::Malformed {
                path: self.path.display().to_string(),
                message: "top-level value is not an object".to_string(),
            });
        };
        object.insert(self.field.clone(), self.value.clone());

        let mut rendered =
            serde_json::to_string_pretty(&doc).map_err(|e| RemediationError::Write {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        rendered.push('\n');
        write_atomic(&self.path, rendered.as_bytes())
    }
}

/// Write to a sibling temp file, fsync, then rename over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), RemediationError> {
    let tmp_path = tmp_write_path(path);
    let write_error = |p: &Path, e: std::io::Error| RemediationError::Write {
        path: p.display().to_string(),
        message: e.to_string(),
    };

    let write_result = (|| -> Result<(), RemediationError> {
        let mut file = File::create(&tmp_path).map_err(|e| write_error(&tmp_path, e))?;
        file.write_all(bytes).map_err(|e| write_error(&tmp_path, e))?;
        file.sync_all().map_err(|e| write_error(&tmp_path, e))?;
        Ok(())
    })();

    if let Err(error) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        write_error(path, e)
    })
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preserves_other_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("http-client.json");
        fs::write(&path, r#"{"timeoutMs": 1000, "retries": 3}"#).unwrap();

        Remediation::set_field(CheckId::Network, path.clone(), "timeoutMs", json!(5000))
            .apply()
            .unwrap();

        let doc: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc, json!({"timeoutMs": 5000, "retries": 3}));
    }

    #[test]
    fn leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate-limit.json");
        fs::write(&path, r#"{"requestsPerMinute": 500}"#).unwrap();

        Remediation::set_field(CheckId::RateLimit, path, "requestsPerMinute", json!(100))
            .apply()
            .unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["rate-limit.json".to_string()]);
    }

    #[test]
    fn rejects_non_object_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("http-client.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = Remediation::set_field(CheckId::Network, path.clone(), "timeoutMs", json!(5000))
            .apply()
            .unwrap_err();
        assert!(matches!(err, RemediationError::Malformed { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn missing_artifact_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Remediation::set_field(
            CheckId::Network,
            dir.path().join("gone.json"),
            "timeoutMs",
            json!(5000),
        )
        .apply()
        .unwrap_err();
        assert!(matches!(err, RemediationError::Read { .. }));
    }
}
