/*!
 * Command-line interface for sfpack
 */

use std::io::{self, Write};

use clap::{CommandFactory, Parser};

use sfpack::builder::ManifestBuilder;
use sfpack::config::{Args, Config};
use sfpack::error::Result;
use sfpack::scanner::{self, LISTING_EXCLUDE};
use sfpack::writer::ManifestWriter;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    match &config.dir {
        // Single-directory mode: list members to stdout, write nothing to disk
        Some(dir) => {
            let listing_dir = config.target_dir.join(dir);
            let members = scanner::list_files(&listing_dir, LISTING_EXCLUDE, true)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            for member in members {
                write!(out, "<members>{}</members>\r\n", member)?;
            }
            out.flush()?;
        }
        // Full-manifest mode: build the manifest and write it into the project
        None => {
            let manifest = ManifestBuilder::new(config.clone()).build()?;
            ManifestWriter::new(config).write(&manifest)?;
        }
    }

    Ok(())
}
