use std::num::NonZeroU32;

use rdkit::ROMol;

use crate::errors::{FPrinterError, Result};
use crate::fprinter::FPrinter;

/// Wraps another fingerprinter and saturates its counts at `max_count`.
#[derive(Debug)]
pub struct CountCappedFPrinter<F> {
    inner: F,
    max_count: u32,
}

/// A zero cap would report presence as a zero count.
pub fn validate_max_count(max_count: u32) -> Result<NonZeroU32> {
    NonZeroU32::new(max_count)
        .ok_or_else(|| FPrinterError::Validation("max_count must be at least 1".to_string()))
}

impl<F: FPrinter> CountCappedFPrinter<F> {
    pub fn new(inner: F, max_count: u32) -> Result<Self> {
        Ok(Self::with_cap(inner, validate_max_count(max_count)?))
    }

    pub fn with_cap(inner: F, max_count: NonZeroU32) -> Self {
        Self {
            inner,
            max_count: max_count.get(),
        }
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: FPrinter> FPrinter for CountCappedFPrinter<F> {
    fn get_binary(&self, molecule: &ROMol) -> Vec<bool> {
        self.inner.get_binary(molecule)
    }

    fn get_counting(&self, molecule: &ROMol) -> Vec<u32> {
        self.inner
            .get_counting(molecule)
            .into_iter()
            .map(|count| count.min(self.max_count))
            .collect()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
