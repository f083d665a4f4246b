use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a result file: the subcommand and its parsed inputs.
pub struct Payload {
    pub op: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(op: &'static str, params: Value) -> Self {
        Self { op, params }
    }
}

/// Write `<result>.provenance.json` next to a result file, recording the git
/// commit, library version, callsite, operation and inputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(result: P, payload: Payload) -> Result<PathBuf> {
    let result = result.as_ref();
    let sidecar = sidecar_path(result);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "homg_version": homg::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "op": payload.op,
        "params": payload.params,
        "outputs": [result.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(result: &Path) -> PathBuf {
    let mut name = result
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("result"));
    name.push(".provenance.json");
    result.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let base = Path::new("/tmp/out/centre.json");
        assert_eq!(
            sidecar_path(base),
            Path::new("/tmp/out/centre.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_op_and_output() {
        let dir = tempdir().unwrap();
        let result = dir.path().join("nested").join("cr.json");
        let payload = Payload::new("cross-ratio", json!({"points": ["(0, 0, 1)"]}));
        let path = write_sidecar(&result, payload).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["op"], "cross-ratio");
        assert_eq!(parsed["outputs"][0], result.to_string_lossy().as_ref());
        assert_eq!(parsed["homg_version"], homg::VERSION);
    }
}
