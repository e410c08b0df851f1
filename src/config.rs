/*!
 * Configuration handling for sfpack
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{Result, SfPackError};

/// Default XML namespace of the manifest root element
pub const DEFAULT_XMLNS: &str = "http://soap.sforce.com/2006/04/metadata";

/// Command-line arguments for sfpack
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "sfpack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate Salesforce package.xml manifests from metadata directory contents",
    long_about = "Scans a project directory whose subfolders hold Salesforce metadata (classes, pages, triggers, ...) and writes the package.xml manifest describing their contents."
)]
pub struct Args {
    /// Project directory containing the metadata folders
    #[clap(default_value = ".")]
    pub root: String,

    /// List the members of a single subdirectory to stdout instead of writing a manifest
    #[clap(long)]
    pub dir: Option<String>,

    /// Salesforce API version written to the manifest
    #[clap(long, default_value = "31.0")]
    pub api_version: String,

    /// Manifest file name, created inside the project directory
    #[clap(long, default_value = "package.xml")]
    pub package_name: String,

    /// XML namespace of the manifest root element
    #[clap(long, default_value = DEFAULT_XMLNS)]
    pub xmlns_source: String,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Project directory to scan
    pub target_dir: PathBuf,

    /// Subdirectory to list in single-directory mode (full-manifest mode when unset)
    pub dir: Option<String>,

    /// API version written into the manifest's version element
    pub api_version: String,

    /// XML namespace of the manifest root element
    pub xmlns: String,

    /// Manifest file path, resolved inside the project directory
    pub output_file: PathBuf,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let target_dir = PathBuf::from(args.root);
        let output_file = target_dir.join(&args.package_name);

        Self {
            target_dir,
            // An empty --dir means full-manifest mode
            dir: args.dir.filter(|d| !d.is_empty()),
            api_version: args.api_version,
            xmlns: args.xmlns_source,
            output_file,
        }
    }

    /// Validate the configuration before any scanning or output happens
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.is_dir() {
            return Err(SfPackError::NotFound(format!(
                "Target directory not found: {}",
                self.target_dir.display()
            )));
        }

        if let Some(dir) = &self.dir {
            let listing_dir = self.target_dir.join(dir);
            if !listing_dir.is_dir() {
                return Err(SfPackError::NotFound(format!(
                    "Listing directory not found: {}",
                    listing_dir.display()
                )));
            }
        }

        // Check that the manifest's parent directory exists
        if let Some(parent) = self.output_file.parent() {
            if !parent.exists() && parent != PathBuf::from("") {
                return Err(SfPackError::NotFound(format!(
                    "Output directory not found: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}
