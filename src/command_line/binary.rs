pub use super::prelude::*;
use crate::fprinter::fingerprint_smiles_binary;
use crate::packing::{bits_to_hex, pack_bits};

pub const NAME: &str = "binary";

pub fn command() -> Command {
    pattern_args(
        Command::new(NAME)
            .about("Print presence/absence substructure fingerprints")
            .arg(smiles_arg())
            .arg(
                Arg::new("packed")
                    .required(false)
                    .long("packed")
                    .action(ArgAction::SetTrue)
                    .help("Emit each fingerprint as a hex string of packed bits"),
            ),
    )
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let smiles = matches
        .get_many::<String>("smiles")
        .ok_or(eyre::eyre!("Failed to extract smiles"))?
        .cloned()
        .collect::<Vec<_>>();
    let packed = matches.get_flag("packed");

    let sources = pattern_sources_from_matches(matches)?;
    let results =
        fingerprint_smiles_binary(|| SubstructureFPrinter::from_sources(&sources), &smiles);

    if packed {
        let records = smiles
            .iter()
            .zip(results)
            .map(|(s, r)| {
                FingerprintRecord::new(s, r.map(|bits| bits_to_hex(&pack_bits(&bits))))
            })
            .collect::<Vec<_>>();
        print_json(&records)
    } else {
        let records = smiles
            .iter()
            .zip(results)
            .map(|(s, r)| FingerprintRecord::new(s, r))
            .collect::<Vec<_>>();
        print_json(&records)
    }
}
