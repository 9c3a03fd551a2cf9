//! `<stem>.provenance.json` sidecars written next to each mesh.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::meshio::Summary;

/// What a subcommand ran with and what it produced.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub summary: Option<Summary>,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            params,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    facemesh_version: &'static str,
    callsite: Callsite,
    command: &'static str,
    params: &'a Value,
    summary: Option<&'a Summary>,
    outputs: Vec<String>,
}

/// Write the sidecar for `artifact`, whose directory must already exist.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let loc = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        facemesh_version: facemesh::VERSION,
        callsite: Callsite {
            file: loc.file(),
            line: loc.line(),
        },
        command: payload.command,
        params: &payload.params,
        summary: payload.summary.as_ref(),
        outputs: vec![artifact.display().to_string()],
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote provenance");
    Ok(path)
}

/// `out/face.json` → `out/face.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Build-time `GIT_COMMIT`, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|r| !r.is_empty()) {
        return rev.to_owned();
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|rev| rev.trim().to_owned())
        .unwrap_or_else(|| "unknown".to_owned())
}
