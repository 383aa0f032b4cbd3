use rdkit::ROMol;

use crate::errors::{FPrinterError, Result};

/// Build a molecule from SMILES, rejecting anything RDKit refuses to sanitize.
pub fn parse_smiles(smiles: &str) -> Result<ROMol> {
    ROMol::from_smiles(smiles).map_err(|e| FPrinterError::InvalidMolecule {
        smiles: smiles.to_string(),
        reason: e.to_string(),
    })
}
