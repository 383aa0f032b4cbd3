pub use super::prelude::*;
use crate::fprinter::{fingerprint_smiles_counting, validate_max_count, CountCappedFPrinter};

pub const NAME: &str = "counting";

pub fn command() -> Command {
    pattern_args(
        Command::new(NAME)
            .about("Print substructure count fingerprints")
            .arg(smiles_arg())
            .arg(
                Arg::new("max_count")
                    .required(false)
                    .long("max-count")
                    .short('m')
                    .num_args(1)
                    .help("Saturate every count at this value"),
            ),
    )
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let smiles = matches
        .get_many::<String>("smiles")
        .ok_or(eyre::eyre!("Failed to extract smiles"))?
        .cloned()
        .collect::<Vec<_>>();
    let max_count = matches.get_one::<String>("max_count");

    let sources = pattern_sources_from_matches(matches)?;

    let results = if let Some(max_count) = max_count {
        let max_count = validate_max_count(max_count.parse::<u32>()?)?;
        fingerprint_smiles_counting(
            || {
                CountCappedFPrinter::with_cap(
                    SubstructureFPrinter::from_sources(&sources),
                    max_count,
                )
            },
            &smiles,
        )
    } else {
        fingerprint_smiles_counting(|| SubstructureFPrinter::from_sources(&sources), &smiles)
    };

    let records = smiles
        .iter()
        .zip(results)
        .map(|(s, r)| FingerprintRecord::new(s, r))
        .collect::<Vec<_>>();

    print_json(&records)
}
