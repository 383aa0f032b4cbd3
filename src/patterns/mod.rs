use std::path::Path;

use cxx::let_cxx_string;
use rdkit::{ROMol, RWMol};

use crate::errors::{FPrinterError, Result};

pub mod resource;

pub use resource::{
    parse_resource_line, parse_resource_text, smarts_keys_from_json, DEFAULT_SMARTS_KEYS,
};

/// One SMARTS key. Keys RDKit could not parse stay in place as `Invalid`
/// so fingerprint positions keep lining up with the key list, and never match.
pub enum Pattern {
    Compiled { smarts: String, query: ROMol },
    Invalid { smarts: String },
}

impl Pattern {
    /// RDKit signals most SMARTS syntax errors with a null molecule, not
    /// an exception.
    pub fn compile(smarts: &str) -> Result<ROMol> {
        let compilation_error = |reason: String| FPrinterError::PatternCompilation {
            smarts: smarts.to_string(),
            reason,
        };

        let_cxx_string!(smarts_cxx = smarts);
        let parsed = rdkit_sys::rw_mol_ffi::smarts_to_mol(&smarts_cxx)
            .map_err(|e| compilation_error(e.to_string()))?;
        if parsed.is_null() {
            return Err(compilation_error("RDKit could not parse SMARTS".to_string()));
        }

        let query = RWMol::from_smarts(smarts).map_err(|e| compilation_error(e.to_string()))?;

        Ok(query.to_ro_mol())
    }

    pub fn new(smarts: &str) -> Self {
        match Self::compile(smarts) {
            Ok(query) => Pattern::Compiled {
                smarts: smarts.to_string(),
                query,
            },
            Err(e) => {
                log::warn!("{}", e);
                Pattern::Invalid {
                    smarts: smarts.to_string(),
                }
            }
        }
    }

    pub fn smarts(&self) -> &str {
        match self {
            Pattern::Compiled { smarts, .. } | Pattern::Invalid { smarts } => smarts,
        }
    }

    pub fn query(&self) -> Option<&ROMol> {
        match self {
            Pattern::Compiled { query, .. } => Some(query),
            Pattern::Invalid { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Pattern::Compiled { .. })
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("smarts", &self.smarts())
            .field("valid", &self.is_valid())
            .finish()
    }
}

/// Ordered, immutable list of compiled SMARTS keys. Index `i` of every
/// fingerprint produced from this set refers to `patterns[i]`.
#[derive(Debug)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Uses `smarts_keys` when given and non-empty, the bundled functional
    /// group keys otherwise.
    pub fn load(smarts_keys: Option<Vec<String>>) -> Self {
        match smarts_keys {
            Some(smarts_keys) if !smarts_keys.is_empty() => {
                Self::from_smarts_keys(smarts_keys.as_slice())
            }
            _ => Self::default_set(),
        }
    }

    pub fn from_smarts_keys<S: AsRef<str>>(smarts_keys: &[S]) -> Self {
        let patterns = smarts_keys
            .iter()
            .map(|smarts| Pattern::new(smarts.as_ref()))
            .collect::<Vec<_>>();

        let set = PatternSet { patterns };
        if set.num_invalid() > 0 {
            log::warn!(
                "{} of {} SMARTS keys could not be parsed and will never match",
                set.num_invalid(),
                set.len()
            );
        }

        set
    }

    pub fn from_resource_str(text: &str) -> Self {
        Self::from_smarts_keys(parse_resource_text(text).as_slice())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let smarts_keys = resource::read_resource_file(path)?;
        Ok(Self::from_smarts_keys(smarts_keys.as_slice()))
    }

    /// Reads a JSON array of SMARTS strings.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let smarts_keys = resource::read_smarts_json_file(path)?;
        Ok(Self::from_smarts_keys(smarts_keys.as_slice()))
    }

    pub fn default_set() -> Self {
        log::debug!(
            "loading {} default SMARTS keys from {}",
            DEFAULT_SMARTS_KEYS.len(),
            resource::DEFAULT_RESOURCE_NAME
        );
        Self::from_smarts_keys(DEFAULT_SMARTS_KEYS.as_slice())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Pattern> {
        self.patterns.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn sources(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.smarts()).collect()
    }

    pub fn num_invalid(&self) -> usize {
        self.patterns.iter().filter(|p| !p.is_valid()).count()
    }
}

impl PatternSet {
    pub fn to_sources(&self) -> PatternSources {
        let entries = self
            .patterns
            .iter()
            .map(|pattern| PatternSource {
                smarts: pattern.smarts().to_string(),
                valid: pattern.is_valid(),
            })
            .collect();

        PatternSources { entries }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSource {
    pub smarts: String,
    pub valid: bool,
}

/// The keys of a `PatternSet` as plain strings, with the parse outcome of
/// each. RDKit query handles cannot be shared between threads, so this is
/// what gets shared; every thread compiles its own `PatternSet` from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSources {
    entries: Vec<PatternSource>,
}

impl PatternSources {
    /// Rebuilds the queries. Keys that failed before are not retried, so
    /// no diagnostics are repeated.
    pub fn compile(&self) -> PatternSet {
        let patterns = self
            .entries
            .iter()
            .map(|entry| {
                if entry.valid {
                    Pattern::new(&entry.smarts)
                } else {
                    Pattern::Invalid {
                        smarts: entry.smarts.clone(),
                    }
                }
            })
            .collect();

        PatternSet { patterns }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternSource> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
