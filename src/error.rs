use std::path::PathBuf;
use thiserror::Error;

use crate::parser::Rule;

#[derive(Error, Debug)]
pub enum InterfaceError {
    #[error("Failed to parse Solidity source, syntax error:\n{0}")]
    Parse(#[from] Box<pest::error::Error<Rule>>),

    #[error("No contract declaration found in source")]
    MissingContract,

    #[error("Failed to read imported file '{}'", path.display())]
    ImportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid enum substitution pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Cyclic import detected while resolving '{}'", path.display())]
    CyclicImport { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, InterfaceError>;
