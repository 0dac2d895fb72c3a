//! Templates compiled into the binary
//!
//! Mirrors the crate's `files/` tree. Paths are relative to the bundle root,
//! use `/` separators and are sorted.

use std::path::{Path, PathBuf};

use super::PROFILES_BUNDLE;
use crate::common::fs::write_file;
use crate::error::Result;

pub static FILES: &[(&str, &str)] = &[
    (
        "profiles/bigquery/profiles.yml",
        include_str!("../../files/profiles/bigquery/profiles.yml"),
    ),
    (
        "profiles/databricks/profiles.yml",
        include_str!("../../files/profiles/databricks/profiles.yml"),
    ),
    (
        "profiles/duckdb/profiles.yml",
        include_str!("../../files/profiles/duckdb/profiles.yml"),
    ),
    (
        "profiles/postgres/profiles.yml",
        include_str!("../../files/profiles/postgres/profiles.yml"),
    ),
    (
        "profiles/redshift/profiles.yml",
        include_str!("../../files/profiles/redshift/profiles.yml"),
    ),
    (
        "profiles/snowflake/profiles.yml",
        include_str!("../../files/profiles/snowflake/profiles.yml"),
    ),
    (
        "project/elementary/config.yml",
        include_str!("../../files/project/elementary/config.yml"),
    ),
    (
        "project/models/elementary/elementary_models.yml",
        include_str!("../../files/project/models/elementary/elementary_models.yml"),
    ),
];

/// Files below `prefix`, as `(relative path, contents)`.
pub fn subtree(prefix: &str) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
    FILES.iter().filter_map(move |&(path, contents)| {
        let relative = path.strip_prefix(prefix)?.strip_prefix('/')?;
        Some((relative, contents))
    })
}

/// Backend tags with a bundled profile, sorted.
pub fn profile_tags() -> Vec<String> {
    let mut tags: Vec<String> = subtree(PROFILES_BUNDLE)
        .filter_map(|(relative, _)| relative.split_once('/'))
        .map(|(tag, _)| tag.to_string())
        .collect();
    tags.dedup();
    tags
}

/// Write every file below `prefix` into `dst`, keeping the relative layout.
pub fn write_subtree(prefix: &str, dst: &Path) -> Result<Vec<PathBuf>> {
    subtree(prefix)
        .map(|(relative, contents)| write_file(&dst.join(relative), contents))
        .collect()
}
