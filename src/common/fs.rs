//! Common file system operations with unified error handling

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, file_read_failed, file_write_failed, io_error};

#[derive(Debug, Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    /// Skip interpreter and OS cache artifacts that may sit inside a bundle.
    pub fn exclude_cache_artifacts() -> Self {
        Self {
            exclude: vec![
                "__pycache__".to_string(),
                ".DS_Store".to_string(),
                ".cache".to_string(),
            ],
        }
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| file_write_failed(parent, e))?;
    }
    Ok(())
}

/// Copy one file, overwriting the target. Returns the target path.
pub fn copy_file(source: &Path, target: &Path) -> Result<PathBuf> {
    ensure_parent_dir(target)?;
    fs::copy(source, target).map_err(|e| file_write_failed(target, e))?;
    Ok(target.to_path_buf())
}

/// Write `contents` to `target`, creating parents and overwriting. Returns the target path.
pub fn write_file(target: &Path, contents: &str) -> Result<PathBuf> {
    ensure_parent_dir(target)?;
    fs::write(target, contents).map_err(|e| file_write_failed(target, e))?;
    Ok(target.to_path_buf())
}

/// Merge the contents of `src` into `dst`.
///
/// Files present in both are overwritten, files only in `dst` are left
/// alone. Returns every file written, in walk order.
pub fn merge_dir(src: &Path, dst: &Path, options: &CopyOptions) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dst).map_err(|e| file_write_failed(dst, e))?;

    let mut written = Vec::new();
    let walker = WalkDir::new(src)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !options.is_excluded(name))
        });

    for entry in walker {
        let entry = entry.map_err(|e| io_error(format!("Failed to walk {}: {e}", src.display())))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io_error(format!("{}: {e}", entry.path().display())))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| file_write_failed(&target, e))?;
        } else {
            written.push(copy_file(entry.path(), &target)?);
        }
    }

    Ok(written)
}

/// Names of the immediate entries of `dir`, sorted.
pub fn list_entries(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| file_read_failed(dir, &e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| file_read_failed(dir, &e))?;
    entries.sort_by_key(fs::DirEntry::file_name);
    Ok(entries)
}
