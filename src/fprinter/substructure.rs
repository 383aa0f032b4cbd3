use std::path::Path;

use rdkit::{substruct_match, ROMol, SubstructMatchParameters};

use crate::errors::Result;
use crate::fprinter::FPrinter;
use crate::patterns::{Pattern, PatternSet, PatternSources};

/// Substructure keys fingerprint: one SMARTS query per position.
#[derive(Debug)]
pub struct SubstructureFPrinter {
    patterns: PatternSet,
}

impl SubstructureFPrinter {
    /// Compiles `smarts_keys`, falling back to the bundled functional group keys.
    pub fn new(smarts_keys: Option<Vec<String>>) -> Self {
        Self::from_pattern_set(PatternSet::load(smarts_keys))
    }

    pub fn from_pattern_set(patterns: PatternSet) -> Self {
        log::info!(
            "substructure fingerprinter ready with {} keys ({} unparsable)",
            patterns.len(),
            patterns.num_invalid()
        );
        Self { patterns }
    }

    /// Compiles a fingerprinter from shared key strings. Used to give each
    /// worker thread its own copy of the queries.
    pub fn from_sources(sources: &PatternSources) -> Self {
        log::debug!("compiling {} SMARTS keys for a worker", sources.len());
        Self {
            patterns: sources.compile(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::from_pattern_set(PatternSet::from_file(path)?))
    }

    pub fn pattern_set(&self) -> &PatternSet {
        &self.patterns
    }
}

impl Default for SubstructureFPrinter {
    fn default() -> Self {
        Self::new(None)
    }
}

// Uniquify is on by default, so each atom set is reported once.
fn count_matches(romol: &ROMol, pattern: &Pattern) -> u32 {
    match pattern.query() {
        Some(query) => {
            let params = SubstructMatchParameters::default();
            let matches = substruct_match(romol, query, &params);
            u32::try_from(matches.len()).unwrap_or(u32::MAX)
        }
        None => 0,
    }
}

// The rdkit bindings expose no max-matches setter, so existence still
// enumerates up to RDKit's default of 1000 unique matches.
fn has_match(romol: &ROMol, pattern: &Pattern) -> bool {
    match pattern.query() {
        Some(query) => {
            let params = SubstructMatchParameters::default();
            !substruct_match(romol, query, &params).is_empty()
        }
        None => false,
    }
}

impl FPrinter for SubstructureFPrinter {
    fn get_binary(&self, molecule: &ROMol) -> Vec<bool> {
        self.patterns
            .iter()
            .map(|pattern| has_match(molecule, pattern))
            .collect()
    }

    fn get_counting(&self, molecule: &ROMol) -> Vec<u32> {
        self.patterns
            .iter()
            .map(|pattern| count_matches(molecule, pattern))
            .collect()
    }

    fn len(&self) -> usize {
        self.patterns.len()
    }
}
