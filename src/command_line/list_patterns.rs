use serde::Serialize;

pub use super::prelude::*;
use crate::patterns::PatternSet;

pub const NAME: &str = "list-patterns";

pub fn command() -> Command {
    pattern_args(Command::new(NAME).about("Print the SMARTS keys in fingerprint order"))
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PatternEntry {
    pub index: usize,
    pub smarts: String,
    pub valid: bool,
}

pub fn pattern_entries(pattern_set: &PatternSet) -> Vec<PatternEntry> {
    pattern_set
        .iter()
        .enumerate()
        .map(|(index, pattern)| PatternEntry {
            index,
            smarts: pattern.smarts().to_string(),
            valid: pattern.is_valid(),
        })
        .collect()
}

pub fn action(matches: &ArgMatches) -> eyre::Result<()> {
    let pattern_set = pattern_set_from_matches(matches)?;
    print_json(&pattern_entries(&pattern_set))
}
