use std::io::Write;

use fprinter::patterns::{Pattern, PatternSet, DEFAULT_SMARTS_KEYS};
use fprinter::FPrinterError;
use tempdir::TempDir;

const SCENARIO_RESOURCE: &str = "# comment\nG1 [OH]\nG2 [NH2]\n\nG3 [Cl]\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> eyre::Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

#[test]
fn test_load_resource_file() -> eyre::Result<()> {
    let tempdir = TempDir::new("fprinter-pattern-tests-")?;
    let path = write_file(&tempdir, "keys.txt", SCENARIO_RESOURCE)?;

    let pattern_set = PatternSet::from_file(&path)?;

    assert_eq!(pattern_set.sources(), vec!["[OH]", "[NH2]", "[Cl]"]);
    assert_eq!(pattern_set.num_invalid(), 0);

    Ok(())
}

#[test]
fn test_resource_str_matches_file() {
    let pattern_set = PatternSet::from_resource_str(SCENARIO_RESOURCE);
    assert_eq!(pattern_set.sources(), vec!["[OH]", "[NH2]", "[Cl]"]);
}

#[test]
fn test_missing_resource_file() {
    let result = PatternSet::from_file("/this/path/does/not/exist/keys.txt");
    assert!(matches!(result, Err(FPrinterError::ResourceLoad { .. })));
}

#[test]
fn test_explicit_empty_list() {
    let empty_keys: Vec<String> = vec![];
    let pattern_set = PatternSet::from_smarts_keys(empty_keys.as_slice());
    assert!(pattern_set.is_empty());
    assert_eq!(pattern_set.len(), 0);
}

#[test]
fn test_duplicates_are_kept_in_order() {
    let pattern_set = PatternSet::from_smarts_keys(&["[Cl]", "[OH]", "[Cl]"]);
    assert_eq!(pattern_set.sources(), vec!["[Cl]", "[OH]", "[Cl]"]);
}

#[test]
fn test_unparsable_key_is_kept_as_invalid() {
    let pattern_set = PatternSet::from_smarts_keys(&["[OH]", "[NH2", "[Cl]"]);

    assert_eq!(pattern_set.len(), 3);
    assert_eq!(pattern_set.num_invalid(), 1);
    assert!(pattern_set.get(0).unwrap().is_valid());
    assert!(!pattern_set.get(1).unwrap().is_valid());
    assert_eq!(pattern_set.get(1).unwrap().smarts(), "[NH2");
    assert!(pattern_set.get(2).unwrap().is_valid());

    assert!(matches!(
        Pattern::compile("[NH2"),
        Err(FPrinterError::PatternCompilation { .. })
    ));
}

#[test]
fn test_default_set() {
    let pattern_set = PatternSet::default_set();

    assert_eq!(pattern_set.len(), DEFAULT_SMARTS_KEYS.len());
    assert_eq!(pattern_set.num_invalid(), 0);
}

#[test]
fn test_load_json_file() -> eyre::Result<()> {
    let tempdir = TempDir::new("fprinter-pattern-tests-")?;

    let path = write_file(&tempdir, "keys.json", r#"["[OH]", "[NH2]"]"#)?;
    let pattern_set = PatternSet::from_json_file(&path)?;
    assert_eq!(pattern_set.sources(), vec!["[OH]", "[NH2]"]);

    let path = write_file(&tempdir, "mixed.json", r#"["[OH]", 42, null]"#)?;
    let result = PatternSet::from_json_file(&path);
    assert!(matches!(result, Err(FPrinterError::Validation(_))));

    let path = write_file(&tempdir, "broken.json", r#"["[OH]""#)?;
    let result = PatternSet::from_json_file(&path);
    assert!(matches!(result, Err(FPrinterError::Validation(_))));

    Ok(())
}
