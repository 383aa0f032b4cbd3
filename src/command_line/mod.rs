use std::io::Write;

use serde::Serialize;

use crate::patterns::{PatternSet, PatternSources};

pub mod binary;
pub mod counting;
pub mod list_patterns;
pub mod rest_api_server;

pub mod prelude {
    pub use clap::{Arg, ArgAction, ArgMatches, Command};

    pub use crate::command_line::{
        pattern_args, pattern_set_from_matches, pattern_sources_from_matches, print_json,
        smiles_arg, FingerprintRecord,
    };
    pub use crate::fprinter::{FPrinter, SubstructureFPrinter};
}

use prelude::{Arg, ArgMatches, Command};

/// `--patterns` (resource file) and `--smarts-json` (JSON list). Neither means
/// the bundled keys.
pub fn pattern_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("patterns")
                .required(false)
                .long("patterns")
                .short('p')
                .num_args(1)
                .conflicts_with("smarts_json"),
        )
        .arg(
            Arg::new("smarts_json")
                .required(false)
                .long("smarts-json")
                .short('j')
                .num_args(1),
        )
}

pub fn smiles_arg() -> Arg {
    Arg::new("smiles")
        .required(true)
        .long("smiles")
        .short('s')
        .num_args(1..)
}

pub fn pattern_set_from_matches(matches: &ArgMatches) -> eyre::Result<PatternSet> {
    let pattern_set = if let Some(path) = matches.get_one::<String>("patterns") {
        log::info!("loading SMARTS keys from resource file {}", path);
        PatternSet::from_file(path)?
    } else if let Some(path) = matches.get_one::<String>("smarts_json") {
        log::info!("loading SMARTS keys from json file {}", path);
        PatternSet::from_json_file(path)?
    } else {
        PatternSet::default_set()
    };

    Ok(pattern_set)
}

/// Compiles the selected keys once, so parse diagnostics are reported once,
/// and keeps the strings for worker threads to compile their own copies.
pub fn pattern_sources_from_matches(matches: &ArgMatches) -> eyre::Result<PatternSources> {
    let pattern_set = pattern_set_from_matches(matches)?;
    log::info!(
        "using {} SMARTS keys ({} unparsable)",
        pattern_set.len(),
        pattern_set.num_invalid()
    );
    Ok(pattern_set.to_sources())
}

#[derive(Serialize, Debug)]
pub struct FingerprintRecord<T> {
    pub smiles: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> FingerprintRecord<T> {
    pub fn new(smiles: &str, result: crate::errors::Result<T>) -> Self {
        match result {
            Ok(fingerprint) => FingerprintRecord {
                smiles: smiles.to_string(),
                fingerprint: Some(fingerprint),
                error: None,
            },
            Err(e) => {
                log::error!("{}", e);
                FingerprintRecord {
                    smiles: smiles.to_string(),
                    fingerprint: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
