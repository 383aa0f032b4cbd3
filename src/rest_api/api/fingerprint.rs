use poem_openapi::payload::Json;

use crate::fprinter::{
    fingerprint_smiles_binary, fingerprint_smiles_counting, validate_max_count,
    CountCappedFPrinter, SubstructureFPrinter,
};
use crate::patterns::PatternSources;
use crate::rest_api::api::{
    BinaryFingerprint, BinaryFingerprintResponse, CountingFingerprint,
    CountingFingerprintResponse,
};
use crate::rest_api::models::Smiles;

pub fn v1_fingerprint_binary(
    sources: &PatternSources,
    smiles_vec: Json<Vec<Smiles>>,
) -> BinaryFingerprintResponse {
    let smiles = smiles_vec
        .0
        .into_iter()
        .map(|s| s.smiles)
        .collect::<Vec<_>>();

    let results =
        fingerprint_smiles_binary(|| SubstructureFPrinter::from_sources(sources), &smiles);

    let fingerprints = results
        .into_iter()
        .zip(smiles)
        .map(|(result, smiles)| match result {
            Ok(fingerprint) => BinaryFingerprint {
                smiles,
                fingerprint: Some(fingerprint),
                error: None,
            },
            Err(e) => BinaryFingerprint {
                smiles,
                fingerprint: None,
                error: Some(e.to_string()),
            },
        })
        .collect::<Vec<_>>();

    BinaryFingerprintResponse::Ok(Json(fingerprints))
}

pub fn v1_fingerprint_counting(
    sources: &PatternSources,
    smiles_vec: Json<Vec<Smiles>>,
    max_count: Option<u32>,
) -> CountingFingerprintResponse {
    let smiles = smiles_vec
        .0
        .into_iter()
        .map(|s| s.smiles)
        .collect::<Vec<_>>();

    let results = match max_count {
        Some(max_count) => match validate_max_count(max_count) {
            Ok(max_count) => fingerprint_smiles_counting(
                || {
                    CountCappedFPrinter::with_cap(
                        SubstructureFPrinter::from_sources(sources),
                        max_count,
                    )
                },
                &smiles,
            ),
            Err(e) => return CountingFingerprintResponse::BadRequest(Json(e.into())),
        },
        None => {
            fingerprint_smiles_counting(|| SubstructureFPrinter::from_sources(sources), &smiles)
        }
    };

    let fingerprints = results
        .into_iter()
        .zip(smiles)
        .map(|(result, smiles)| match result {
            Ok(fingerprint) => CountingFingerprint {
                smiles,
                fingerprint: Some(fingerprint),
                error: None,
            },
            Err(e) => CountingFingerprint {
                smiles,
                fingerprint: None,
                error: Some(e.to_string()),
            },
        })
        .collect::<Vec<_>>();

    CountingFingerprintResponse::Ok(Json(fingerprints))
}
