use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Fails if anything already exists at `path`.
pub fn ensure_absent<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    // symlink_metadata so a dangling symlink also counts as taken
    if path.symlink_metadata().is_ok() {
        return Err(Error::ProjectExistsError { path: path.display().to_string() });
    }
    Ok(path.to_path_buf())
}

/// Creates a single directory; its parent must exist and it must not.
pub fn create_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir(dest_path.as_ref()).map_err(Error::IoError)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Creates an empty file, leaving an existing one untouched.
pub fn touch<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dest_path.as_ref())
        .map(|_| ())
        .map_err(Error::IoError)
}

pub fn read_json<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let buf = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&buf)?)
}

/// Writes `value` pretty-printed with a trailing newline, the way npm does.
pub fn write_json<P: AsRef<Path>>(path: P, value: &serde_json::Value) -> Result<()> {
    let path = path.as_ref();
    let mut buf = serde_json::to_string_pretty(value)?;
    buf.push('\n');
    log::debug!("Writing {}", path.display());
    write_file(&buf, path)
}
