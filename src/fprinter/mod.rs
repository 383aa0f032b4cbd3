use bitvec::prelude::{BitVec, Lsb0};
use rayon::prelude::*;
use rdkit::ROMol;

use crate::errors::Result;
use crate::molecule::parse_smiles;
use crate::packing::pack_bits;

pub mod count_capped;
pub mod substructure;

pub use count_capped::{validate_max_count, CountCappedFPrinter};
pub use substructure::SubstructureFPrinter;

/// A fingerprint flavor. Both vectors have one entry per key, in key order.
///
/// Fingerprinters own RDKit query handles, which can be moved to another
/// thread but not shared. Parallel callers build one per worker, see
/// [`fingerprint_smiles_binary`].
pub trait FPrinter {
    /// `true` at `i` when key `i` occurs at least once in `molecule`.
    fn get_binary(&self, molecule: &ROMol) -> Vec<bool>;

    /// Number of unique occurrences of key `i` in `molecule`. Matches that
    /// cover the same atoms (symmetry-equivalent mappings) count once.
    fn get_counting(&self, molecule: &ROMol) -> Vec<u32>;

    /// Length of the vectors this fingerprinter produces.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_binary_packed(&self, molecule: &ROMol) -> BitVec<u8, Lsb0> {
        pack_bits(&self.get_binary(molecule))
    }
}

impl<F: FPrinter + ?Sized> FPrinter for &F {
    fn get_binary(&self, molecule: &ROMol) -> Vec<bool> {
        (**self).get_binary(molecule)
    }

    fn get_counting(&self, molecule: &ROMol) -> Vec<u32> {
        (**self).get_counting(molecule)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

fn fingerprint_smiles<F, B, T, M>(smiles: &[String], build: B, op: M) -> Vec<Result<T>>
where
    F: FPrinter,
    B: Fn() -> F + Sync + Send,
    T: Send,
    M: Fn(&F, &ROMol) -> T + Sync + Send,
{
    smiles
        .par_iter()
        .map_init(build, |fprinter, smiles| {
            parse_smiles(smiles).map(|romol| op(&*fprinter, &romol))
        })
        .collect::<Vec<_>>()
}

/// Parses and fingerprints each SMILES in parallel. `build` is called once per
/// rayon work unit to make that worker's fingerprinter. Output order follows
/// input order.
pub fn fingerprint_smiles_binary<F, B>(build: B, smiles: &[String]) -> Vec<Result<Vec<bool>>>
where
    F: FPrinter,
    B: Fn() -> F + Sync + Send,
{
    fingerprint_smiles(smiles, build, |fprinter, romol| fprinter.get_binary(romol))
}

pub fn fingerprint_smiles_counting<F, B>(build: B, smiles: &[String]) -> Vec<Result<Vec<u32>>>
where
    F: FPrinter,
    B: Fn() -> F + Sync + Send,
{
    fingerprint_smiles(smiles, build, |fprinter, romol| fprinter.get_counting(romol))
}
