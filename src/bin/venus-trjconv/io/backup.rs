use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

/// Renames an existing `path` to `#<name>.<n>#` in the same directory.
///
/// `n` is one more than the number of backups already present. Returns the
/// backup path, or `None` when nothing had to be moved.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return Ok(None);
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let prefix = format!("#{name}.");
    let existing = fs::read_dir(&dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            file_name.starts_with(&prefix) && file_name.ends_with('#') && file_name.len() > prefix.len() + 1
        })
        .count();

    let mut n = existing + 1;
    let mut backup = path.with_file_name(format!("#{name}.{n}#"));
    while backup.exists() {
        warn!("Backup slot {} is taken, trying the next one", backup.display());
        n += 1;
        backup = path.with_file_name(format!("#{name}.{n}#"));
    }

    fs::rename(path, &backup).with_context(|| {
        format!(
            "Failed to back up {} to {}",
            path.display(),
            backup.display()
        )
    })?;
    info!("Backed up {} to {}", path.display(), backup.display());

    Ok(Some(backup))
}
