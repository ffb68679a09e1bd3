//! Input path collection

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Check for a `.json` extension, ignoring case
pub fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Expand input paths into the JSON files to process
///
/// Directories contribute their `*.json` files, or `**/*.json` when
/// `recursive` is set. Non-JSON files are dropped. Order is kept and
/// duplicates are removed.
pub fn collect_inputs(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut inputs = Vec::new();

    for path in paths {
        if path.is_dir() {
            for file in json_files_in(path, recursive)? {
                if seen.insert(file.clone()) {
                    inputs.push(file);
                }
            }
        } else if is_json_path(path) {
            if seen.insert(path.clone()) {
                inputs.push(path.clone());
            }
        } else {
            log::debug!("Ignoring non-JSON input {}", path.display());
        }
    }

    Ok(inputs)
}

fn json_files_in(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = if recursive {
        format!("{escaped}/**/*")
    } else {
        format!("{escaped}/*")
    };

    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("Invalid directory pattern: {pattern}"))?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file() && is_json_path(path))
        .collect();
    files.sort();
    Ok(files)
}
