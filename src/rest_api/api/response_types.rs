use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::rest_api::models::GenericResponseError;

#[derive(Object, Debug)]
pub struct BinaryFingerprint {
    pub smiles: String,
    #[oai(skip_serializing_if_is_none)]
    pub fingerprint: Option<Vec<bool>>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

#[derive(Object, Debug)]
pub struct CountingFingerprint {
    pub smiles: String,
    #[oai(skip_serializing_if_is_none)]
    pub fingerprint: Option<Vec<u32>>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

#[derive(Object, Debug)]
pub struct PatternMeta {
    pub index: u64,
    pub smarts: String,
    pub valid: bool,
}

// Response types
#[derive(ApiResponse, Debug)]
pub enum BinaryFingerprintResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<Vec<BinaryFingerprint>>),
}

#[derive(ApiResponse, Debug)]
pub enum CountingFingerprintResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<Vec<CountingFingerprint>>),
    #[oai(status = "400", content_type = "application/json")]
    BadRequest(Json<GenericResponseError>),
}

#[derive(ApiResponse, Debug)]
pub enum ListPatternsResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<Vec<PatternMeta>>),
}
