//! Optional validation oracle.
//!
//! After the artifact is written it can be handed to an external PHP
//! parser; a failure exit is fatal for the run, but the artifact is kept
//! on disk (it was written before validation started).  When no
//! executable with the parser's name can be resolved the check is
//! skipped with a note.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::Error;

/// Run the external parser over the artifact when available.
pub fn validate(artifact: &Path, parser: &str) -> Result<(), Error> {
    if which::which(parser).is_err() {
        info!("note: put {parser} in your path and the generated file can be checked directly");
        return Ok(());
    }

    info!("making sure the generated file is valid...");
    let status = Command::new(parser)
        .arg(artifact)
        .status()
        .map_err(|source| Error::ValidatorSpawn {
            command: parser.to_string(),
            source,
        })?;
    if !status.success() {
        return Err(Error::Validation {
            path: artifact.to_path_buf(),
        });
    }
    Ok(())
}
