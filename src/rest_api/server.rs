use poem::{listener::TcpListener, Route, Server};
use poem_openapi::{ContactObject, OpenApiService};

use crate::patterns::{PatternSet, PatternSources};
use crate::rest_api::api::ApiV1;

pub const API_PREFIX: &str = "/api";

pub fn api_service(server_url: &str, sources: PatternSources) -> OpenApiService<ApiV1, ()> {
    OpenApiService::new(ApiV1::new(sources), "fprinter", "1.0")
        .server(format!("{}{}", server_url, API_PREFIX))
        .description("fprinter: substructure fingerprints for small molecules")
        .contact(ContactObject::new().url(server_url))
}

pub async fn run_api_service(
    bind: &str,
    server_url: &str,
    sources: PatternSources,
) -> eyre::Result<()> {
    let api_service = api_service(server_url, sources);
    let ui = api_service.swagger_ui();

    let spec = api_service.spec();

    log::info!("serving fingerprints on {}", bind);
    Server::new(TcpListener::bind(bind))
        .run(
            Route::new()
                .at(
                    "/api/v1/openapi.json",
                    poem::endpoint::make_sync(move |_| spec.clone()),
                )
                .nest(API_PREFIX, api_service)
                .nest("/", ui),
        )
        .await?;

    Ok(())
}

pub fn output_spec(server_url: &str, output: &str) -> eyre::Result<()> {
    let empty_keys: [&str; 0] = [];
    let sources = PatternSet::from_smarts_keys(&empty_keys).to_sources();
    let api_service = api_service(server_url, sources);

    let spec = api_service.spec();

    std::fs::write(output, spec)?;

    Ok(())
}
