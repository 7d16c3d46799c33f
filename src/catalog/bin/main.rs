use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use book_catalog::core::controller::{routes, AppState};
use book_catalog::core::domain::Configuration;
use book_catalog::utils::ddb::setup_tracing;

// Runs under the Lambda runtime when deployed as a function, as a plain HTTP server otherwise.
// See https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.log_level.as_str());

    let state = AppState::build(&config).await?;

    if std::env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        info!("starting lambda runtime");
        return run(routes::<lambda_http::Body>(state)).await;
    }

    let app: axum::Router = routes(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "server listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown requested");
}
