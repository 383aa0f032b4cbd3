use fprinter::fprinter::{
    fingerprint_smiles_binary, fingerprint_smiles_counting, validate_max_count,
};
use fprinter::molecule::parse_smiles;
use fprinter::packing::bits_to_string;
use fprinter::patterns::PatternSet;
use fprinter::{CountCappedFPrinter, FPrinter, FPrinterError, SubstructureFPrinter};

const SCENARIO_RESOURCE: &str = "# comment\nG1 [OH]\nG2 [NH2]\n\nG3 [Cl]\n";

const TEST_SMILES: [&str; 6] = [
    "NCC(Cl)Cl",
    "CCO",
    "c1ccccc1O",
    "OC(=O)C(N)CCCC(Cl)Cl",
    "C1=CC=CC=C1C(C)C",
    "CC(=O)Oc1ccccc1C(=O)O",
];

fn scenario_fprinter() -> SubstructureFPrinter {
    SubstructureFPrinter::from_pattern_set(PatternSet::from_resource_str(SCENARIO_RESOURCE))
}

#[test]
fn test_scenario_molecule() {
    let fprinter = scenario_fprinter();
    // no hydroxyl, one primary amine, two chlorines
    let romol = parse_smiles("NCC(Cl)Cl").unwrap();

    assert_eq!(fprinter.get_binary(&romol), vec![false, true, true]);
    assert_eq!(fprinter.get_counting(&romol), vec![0, 1, 2]);
}

#[test]
fn test_vector_lengths() {
    let fprinter = SubstructureFPrinter::default();

    for smiles in TEST_SMILES {
        let romol = parse_smiles(smiles).unwrap();
        assert_eq!(fprinter.get_binary(&romol).len(), fprinter.len());
        assert_eq!(fprinter.get_counting(&romol).len(), fprinter.len());
        assert_eq!(fprinter.len(), fprinter.pattern_set().len());
    }
}

#[test]
fn test_binary_agrees_with_counting() {
    let fprinter = SubstructureFPrinter::default();

    for smiles in TEST_SMILES {
        let romol = parse_smiles(smiles).unwrap();
        let binary = fprinter.get_binary(&romol);
        let counting = fprinter.get_counting(&romol);

        for (idx, (present, count)) in binary.iter().zip(&counting).enumerate() {
            assert_eq!(
                *present,
                *count > 0,
                "key {} disagrees for {}",
                fprinter.pattern_set().get(idx).unwrap().smarts(),
                smiles
            );
        }
    }
}

#[test]
fn test_empty_pattern_set() {
    let empty_keys: [&str; 0] = [];
    let fprinter =
        SubstructureFPrinter::from_pattern_set(PatternSet::from_smarts_keys(&empty_keys));
    let romol = parse_smiles("CCO").unwrap();

    assert!(fprinter.is_empty());
    assert!(fprinter.get_binary(&romol).is_empty());
    assert!(fprinter.get_counting(&romol).is_empty());
}

#[test]
fn test_unparsable_key_reports_nothing() {
    let fprinter = SubstructureFPrinter::new(Some(vec![
        "[OH]".to_string(),
        "[NH2".to_string(),
        "[Cl]".to_string(),
    ]));
    let romol = parse_smiles("NCC(Cl)Cl").unwrap();

    assert_eq!(fprinter.get_binary(&romol), vec![false, false, true]);
    assert_eq!(fprinter.get_counting(&romol), vec![0, 0, 2]);
}

#[test]
fn test_idempotent() {
    let fprinter = SubstructureFPrinter::default();
    let romol = parse_smiles("CC(=O)Oc1ccccc1C(=O)O").unwrap();

    assert_eq!(fprinter.get_binary(&romol), fprinter.get_binary(&romol));
    assert_eq!(fprinter.get_counting(&romol), fprinter.get_counting(&romol));
}

#[test]
fn test_default_keys_find_functional_groups() {
    let fprinter = SubstructureFPrinter::default();
    let pattern_set = fprinter.pattern_set();
    let phenol = parse_smiles("c1ccccc1O").unwrap();
    let binary = fprinter.get_binary(&phenol);

    let position = |smarts: &str| {
        pattern_set
            .sources()
            .iter()
            .position(|s| *s == smarts)
            .unwrap()
    };

    assert!(binary[position("[OX2H][c]")]);
    assert!(binary[position("a")]);
    assert!(!binary[position("[NX1]#[CX2]")]);
}

#[test]
fn test_packed_binary() {
    let fprinter = scenario_fprinter();
    let romol = parse_smiles("NCC(Cl)Cl").unwrap();

    let packed = fprinter.get_binary_packed(&romol);
    assert_eq!(bits_to_string(&packed), "011");
}

#[test]
fn test_count_capped_keeps_binary_invariant() {
    let fprinter = CountCappedFPrinter::new(scenario_fprinter(), 1).unwrap();
    let romol = parse_smiles("NCC(Cl)Cl").unwrap();

    assert_eq!(fprinter.get_counting(&romol), vec![0, 1, 1]);
    assert_eq!(fprinter.get_binary(&romol), vec![false, true, true]);
    assert_eq!(fprinter.len(), 3);
}

#[test]
fn test_trait_object() {
    let fprinters: Vec<Box<dyn FPrinter>> = vec![
        Box::new(scenario_fprinter()),
        Box::new(CountCappedFPrinter::new(scenario_fprinter(), 5).unwrap()),
    ];
    let romol = parse_smiles("ClCCl").unwrap();

    for fprinter in &fprinters {
        assert_eq!(fprinter.get_counting(&romol), vec![0, 0, 2]);
    }
}

#[test]
fn test_batch_fingerprints_keep_input_order() {
    let sources = PatternSet::from_resource_str(SCENARIO_RESOURCE).to_sources();
    let build = || SubstructureFPrinter::from_sources(&sources);
    let smiles = vec![
        "NCC(Cl)Cl".to_string(),
        "not a molecule".to_string(),
        "CCO".to_string(),
    ];

    let binary = fingerprint_smiles_binary(build, &smiles);
    assert_eq!(binary.len(), 3);
    assert_eq!(binary[0].as_ref().unwrap(), &vec![false, true, true]);
    assert!(matches!(
        binary[1],
        Err(FPrinterError::InvalidMolecule { .. })
    ));
    assert_eq!(binary[2].as_ref().unwrap(), &vec![true, false, false]);

    let counting = fingerprint_smiles_counting(build, &smiles);
    assert_eq!(counting[0].as_ref().unwrap(), &vec![0, 1, 2]);
    assert!(counting[1].is_err());
    assert_eq!(counting[2].as_ref().unwrap(), &vec![1, 0, 0]);
}

#[test]
fn test_batch_matches_single_threaded_results() {
    let fprinter = SubstructureFPrinter::default();
    let sources = fprinter.pattern_set().to_sources();
    let smiles = TEST_SMILES
        .iter()
        .cycle()
        .take(60)
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let max_count = validate_max_count(1).unwrap();
    let counting = fingerprint_smiles_counting(
        || CountCappedFPrinter::with_cap(SubstructureFPrinter::from_sources(&sources), max_count),
        &smiles,
    );
    let binary =
        fingerprint_smiles_binary(|| SubstructureFPrinter::from_sources(&sources), &smiles);

    for ((smiles, counts), bits) in smiles.iter().zip(counting).zip(binary) {
        let romol = parse_smiles(smiles).unwrap();
        let expected = fprinter.get_binary(&romol);
        assert_eq!(bits.unwrap(), expected);
        assert_eq!(
            counts.unwrap(),
            expected.iter().map(|b| *b as u32).collect::<Vec<_>>()
        );
    }
}
