use poem_openapi::payload::Json;

use crate::patterns::PatternSources;
use crate::rest_api::api::{ListPatternsResponse, PatternMeta};

pub fn v1_list_patterns(sources: &PatternSources) -> ListPatternsResponse {
    let patterns = sources
        .iter()
        .enumerate()
        .map(|(index, source)| PatternMeta {
            index: index as u64,
            smarts: source.smarts.clone(),
            valid: source.valid,
        })
        .collect::<Vec<_>>();

    ListPatternsResponse::Ok(Json(patterns))
}
