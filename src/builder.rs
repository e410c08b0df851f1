/*!
 * Manifest assembly from scanned directory contents
 */

use crate::config::Config;
use crate::error::Result;
use crate::registry;
use crate::scanner::{self, MANIFEST_EXCLUDE};
use crate::types::{Manifest, TypeGroup};

/// Builder for the in-memory manifest
pub struct ManifestBuilder {
    /// Builder configuration
    config: Config,
}

impl ManifestBuilder {
    /// Create a new manifest builder
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan the project directory and assemble the manifest.
    ///
    /// Each immediate subfolder becomes one group, in folder-listing order,
    /// with its files listed non-recursively minus the manifest exclusions.
    /// Empty subfolders still produce a group. Any listing failure aborts
    /// the whole build; no partial manifest is returned.
    pub fn build(&self) -> Result<Manifest> {
        let mut groups = Vec::new();

        for folder in scanner::list_subfolders(&self.config.target_dir)? {
            let folder_name = folder
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();

            let members = scanner::list_files(&folder, MANIFEST_EXCLUDE, false)?;

            // Folders outside the type table keep their raw name
            let type_name = match registry::lookup(&folder_name) {
                Some(type_name) => type_name.to_string(),
                None => folder_name,
            };

            groups.push(TypeGroup { type_name, members });
        }

        Ok(Manifest {
            groups,
            api_version: self.config.api_version.clone(),
            xmlns: self.config.xmlns.clone(),
        })
    }
}
