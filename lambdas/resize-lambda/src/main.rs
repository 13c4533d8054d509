use aws_sdk_s3::Client as S3Client;
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;
use thumbkit_shared::{AppState, Config, S3ObjectStore};

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Configuration and AWS client are built once at startup; everything
    // downstream receives them read-only
    let config = Config::from_env()?;
    tracing::info!(
        bucket = %config.bucket,
        prefix = %config.original_prefix,
        allowed = config.allowed_resolutions.len(),
        "resize lambda starting"
    );

    let aws_config = aws_config::load_from_env().await;
    let store = S3ObjectStore::new(S3Client::new(&aws_config), config.bucket.clone());

    let state = AppState::new(config, Arc::new(store));

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
