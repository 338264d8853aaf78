//! Pipeline error types.
//!
//! Extraction itself never fails — irrelevant or malformed documents are
//! skipped silently — so errors only arise once the artifact exists and
//! the external parser rejects it (or cannot be run at all).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not run validator `{command}`: {source}")]
    ValidatorSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse generated file {path}, aborting")]
    Validation { path: PathBuf },
}
