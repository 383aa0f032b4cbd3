use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FPrinterError>;

#[derive(Debug, Error)]
pub enum FPrinterError {
    /// A single SMARTS key could not be compiled. Loading logs this and keeps going.
    #[error("could not parse SMARTS '{smarts}': {reason}")]
    PatternCompilation { smarts: String, reason: String },
    #[error("could not read pattern resource {path:?}: {source}")]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid SMARTS key list: {0}")]
    Validation(String),
    #[error("could not parse molecule '{smiles}': {reason}")]
    InvalidMolecule { smiles: String, reason: String },
}
