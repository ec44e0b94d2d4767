use std::sync::Arc;
use lambda_http::{run, Body, Error};
use movie_catalog::catalog::controller::router;
use movie_catalog::catalog::factory::create_catalog_service;
use movie_catalog::core::controller::AppState;
use movie_catalog::core::domain::Configuration;
use movie_catalog::core::repository::RepositoryStore;
use movie_catalog::utils::ddb::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    if config.store != RepositoryStore::DynamoDB {
        // run outside of lambda against the local runtime emulator
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
    }

    let catalog = create_catalog_service(&config).await;
    let state = AppState::new(config, Arc::from(catalog));
    run(router::<Body>(state)).await
}
