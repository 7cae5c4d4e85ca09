// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::ensure_parent;
use std::io::{self, Write};
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok
/// - file exists and `force == false` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".into(),
        ))
    }
}

/// Render an artifact through a scratch file next to `path`, then move it in
/// place. If `render` fails the scratch file is deleted and `path` is left
/// untouched.
pub(crate) fn write_atomically<F>(path: &Path, render: F) -> AppResult<()>
where
    F: FnOnce(&Path) -> AppResult<()>,
{
    ensure_parent(path)?;

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let scratch = tempfile::Builder::new()
        .prefix(".rattendance-")
        .suffix(".part")
        .tempfile_in(dir)?;

    render(scratch.path())?;

    scratch
        .persist(path)
        .map_err(|e| AppError::from(e.error))?;

    Ok(())
}
