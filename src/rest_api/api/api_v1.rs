use poem_openapi::{param::Query, payload::Json, OpenApi};

use crate::patterns::PatternSources;
use crate::rest_api::api::{
    v1_fingerprint_binary, v1_fingerprint_counting, v1_list_patterns, BinaryFingerprintResponse,
    CountingFingerprintResponse, ListPatternsResponse,
};
use crate::rest_api::models::Smiles;

pub struct ApiV1 {
    sources: PatternSources,
}

impl ApiV1 {
    pub fn new(sources: PatternSources) -> Self {
        Self { sources }
    }
}

#[OpenApi]
impl ApiV1 {
    #[oai(path = "/v1/fingerprint/binary", method = "post")]
    /// Presence/absence of every SMARTS key for each SMILES
    pub async fn v1_fingerprint_binary(
        &self,
        smiles: Json<Vec<Smiles>>,
    ) -> BinaryFingerprintResponse {
        v1_fingerprint_binary(&self.sources, smiles)
    }

    #[oai(path = "/v1/fingerprint/counting", method = "post")]
    /// Unique match count of every SMARTS key for each SMILES, optionally capped
    pub async fn v1_fingerprint_counting(
        &self,
        smiles: Json<Vec<Smiles>>,
        max_count: Query<Option<u32>>,
    ) -> CountingFingerprintResponse {
        v1_fingerprint_counting(&self.sources, smiles, max_count.0)
    }

    #[oai(path = "/v1/patterns", method = "get")]
    /// List the SMARTS keys in fingerprint order
    pub async fn v1_list_patterns(&self) -> ListPatternsResponse {
        v1_list_patterns(&self.sources)
    }
}
