// src/store.rs
use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use log::info;

use crate::config::options::RunOptions;
use crate::error::Result;
use crate::model::Snapshot;

/// Paths of the two artifacts a run leaves behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Written {
    pub json: PathBuf,
    pub html: PathBuf,
}

/// Pretty-printed snapshot JSON, one key per source plus `generated_at`.
pub fn snapshot_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write the JSON snapshot and the rendered page into `opts.out_dir`,
/// creating it if needed. Existing files are overwritten.
pub fn write_outputs(snapshot: &Snapshot, html: &str, opts: &RunOptions) -> Result<Written> {
    ensure_directory(&opts.out_dir)?;

    let json = opts.json_path();
    fs::write(&json, snapshot_json(snapshot)?)?;
    info!("wrote {}", json.display());

    let page = opts.html_path();
    fs::write(&page, html)?;
    info!("wrote {}", page.display());

    Ok(Written { json, html: page })
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
