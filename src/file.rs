// src/file.rs

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use crate::config::consts::REGISTRATION_PREFIX;

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Write to `<path>.tmp`, then rename over `path`, so an interrupted run
/// never leaves a half-written registration behind.
pub fn write_replace(path: &Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent(path)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

/// `ut_registration_*.json` files in `dir`, sorted by file name.
pub fn registration_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    if !dir.exists() { return Ok(out); }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if name.starts_with(REGISTRATION_PREFIX) && name.ends_with(".json") {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}
