use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Everything needed to reproduce a trace: code revision, callsite, and run params.
#[derive(Debug, Serialize)]
pub struct Provenance<P: Serialize> {
    pub code_rev: String,
    pub version: &'static str,
    pub callsite: Callsite,
    pub params: P,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl<P: Serialize> Provenance<P> {
    #[track_caller]
    pub fn new(params: P, outputs: Vec<String>) -> Self {
        let callsite = Location::caller();
        Self {
            code_rev: current_git_rev(),
            version: windmill::VERSION,
            callsite: Callsite {
                file: callsite.file(),
                line: callsite.line(),
            },
            params,
            outputs,
        }
    }
}

/// Write `<stem>.provenance.json` next to `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: Serialize>(artifact: &Path, params: P) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = Provenance::new(params, vec![artifact.to_string_lossy().into_owned()]);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "trace".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
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
