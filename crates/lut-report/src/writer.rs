//! Rendered table output.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lut_model::{LutError, Result};
use tracing::info;

/// Replace `path` with `contents`.
///
/// The text is written to a sibling temp file and renamed over the target, so
/// the output file either keeps its previous contents or holds exactly one
/// complete copy of the new table. Re-running a generator never duplicates
/// earlier output.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| LutError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = temp_path_for(path);
    let result = write_temp(&temp_path, contents).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|source| LutError::Io {
            operation: "replace",
            path: path.to_path_buf(),
            source,
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    info!(path = %path.display(), bytes = contents.len(), "wrote table");
    Ok(())
}

fn write_temp(temp_path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|source| LutError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source,
    })?;
    file.write_all(contents.as_bytes())
        .map_err(|source| LutError::Io {
            operation: "write",
            path: temp_path.to_path_buf(),
            source,
        })?;
    file.sync_all().map_err(|source| LutError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}
