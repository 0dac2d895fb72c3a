//! Template deployment
//!
//! A bundle has two parts:
//!
//! ```text
//! project/            merged into the project directory
//! profiles/<type>/    exactly one merged into the profiles directory
//! ```
//!
//! The templates are compiled into the binary ([`Bundle::Embedded`]). A
//! directory with the same layout can replace them ([`Bundle::Dir`]).
//!
//! Deployment merges rather than replaces, so running it twice leaves the
//! same tree behind. There is no locking: concurrent deployments into the
//! same directories interleave in an undefined order.

pub mod embedded;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::common::fs::{CopyOptions, copy_file, list_entries, merge_dir};
use crate::error::{Result, file_write_failed, profile_not_found};

pub const PROJECT_BUNDLE: &str = "project";
pub const PROFILES_BUNDLE: &str = "profiles";

/// Where the templates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bundle {
    /// Templates compiled into the binary.
    Embedded,
    /// Templates read from a directory at deploy time.
    Dir(PathBuf),
}

/// What a deployment wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployReport {
    pub project_dir: PathBuf,
    pub profiles_dir: PathBuf,
    pub type_tag: String,
    pub files: Vec<PathBuf>,
}

/// Copies the bundled templates into a project layout.
#[derive(Debug, Clone)]
pub struct TemplateDeployer {
    bundle: Bundle,
    options: CopyOptions,
}

impl TemplateDeployer {
    /// Deployer for the templates compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            bundle: Bundle::Embedded,
            options: CopyOptions::exclude_cache_artifacts(),
        }
    }

    /// Deployer reading its templates from `bundle_dir`.
    pub fn new(bundle_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundle: Bundle::Dir(bundle_dir.into()),
            options: CopyOptions::exclude_cache_artifacts(),
        }
    }

    /// Embedded templates unless `bundle_dir` overrides them.
    pub fn for_bundle_dir(bundle_dir: Option<&Path>) -> Self {
        bundle_dir.map_or_else(Self::embedded, Self::new)
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// Supported backend type tags, sorted.
    pub fn available_profiles(&self) -> Result<Vec<String>> {
        match &self.bundle {
            Bundle::Embedded => Ok(embedded::profile_tags()),
            Bundle::Dir(dir) => Ok(list_entries(&dir.join(PROFILES_BUNDLE))?
                .into_iter()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| !self.options.is_excluded(name))
                .collect()),
        }
    }

    /// Whether a profile is bundled for `type_tag`. Tags match exactly.
    pub fn has_profile(&self, type_tag: &str) -> Result<bool> {
        Ok(self
            .available_profiles()?
            .iter()
            .any(|name| name == type_tag))
    }

    /// Deploy the project bundle and the profile matching `type_tag`.
    ///
    /// The project bundle is always deployed first. When no profile matches,
    /// the profiles directory is neither created nor modified and
    /// [`crate::error::ExtensionError::ProfileNotFound`] is returned.
    pub fn deploy(
        &self,
        project_dir: &Path,
        profiles_dir: &Path,
        type_tag: &str,
    ) -> Result<DeployReport> {
        let mut files = self.deploy_project(project_dir)?;

        if !self.has_profile(type_tag)? {
            let available = self.available_profiles()?;
            return Err(profile_not_found(type_tag, available.as_slice()));
        }

        std::fs::create_dir_all(profiles_dir).map_err(|e| file_write_failed(profiles_dir, e))?;
        let profile_files = self.deploy_profile(type_tag, profiles_dir)?;
        debug!(
            type_tag,
            profiles_dir = %profiles_dir.display(),
            files = profile_files.len(),
            "deployed profile"
        );
        files.extend(profile_files);

        info!(
            project_dir = %project_dir.display(),
            profiles_dir = %profiles_dir.display(),
            type_tag,
            files = files.len(),
            "templates deployed"
        );

        Ok(DeployReport {
            project_dir: project_dir.to_path_buf(),
            profiles_dir: profiles_dir.to_path_buf(),
            type_tag: type_tag.to_string(),
            files,
        })
    }

    fn deploy_project(&self, project_dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(project_dir).map_err(|e| file_write_failed(project_dir, e))?;

        let files = match &self.bundle {
            Bundle::Embedded => embedded::write_subtree(PROJECT_BUNDLE, project_dir)?,
            Bundle::Dir(dir) => self.merge_project_dir(&dir.join(PROJECT_BUNDLE), project_dir)?,
        };

        debug!(
            project_dir = %project_dir.display(),
            files = files.len(),
            "deployed project bundle"
        );
        Ok(files)
    }

    fn merge_project_dir(&self, source_dir: &Path, project_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in list_entries(source_dir)? {
            let name = entry.file_name();
            if name.to_str().is_some_and(|n| self.options.is_excluded(n)) {
                continue;
            }

            let source = entry.path();
            let target = project_dir.join(&name);
            if source.is_dir() {
                files.extend(merge_dir(&source, &target, &self.options)?);
            } else {
                files.push(copy_file(&source, &target)?);
            }
        }
        Ok(files)
    }

    fn deploy_profile(&self, type_tag: &str, profiles_dir: &Path) -> Result<Vec<PathBuf>> {
        match &self.bundle {
            Bundle::Embedded => {
                embedded::write_subtree(&format!("{PROFILES_BUNDLE}/{type_tag}"), profiles_dir)
            }
            Bundle::Dir(dir) => merge_dir(
                &dir.join(PROFILES_BUNDLE).join(type_tag),
                profiles_dir,
                &self.options,
            ),
        }
    }
}
