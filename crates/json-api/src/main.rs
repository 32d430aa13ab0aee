//! Stockroom JSON API Server

use std::{process, time::Duration};

use salvo::{
    affix_state::inject,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors},
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    timeout::Timeout,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use stockroom_app::{audit::AuditLog, context::AppContext};

use crate::{config::ServerConfig, state::State};

mod config;
mod extensions;
mod fallback;
mod healthcheck;
mod logging;
mod products;
mod reports;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod transactions;

/// Stockroom JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    logging::init(&config.logging);

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let audit = AuditLog::new(&config.audit.audit_log_path);

    let app = match AppContext::from_database_url(&config.database.database_url, audit).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    // CORS is open to any origin; the handler also answers preflight
    // OPTIONS requests.
    let cors = Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler();

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(Timeout::new(Duration::from_secs(
            config.server.request_timeout_seconds,
        )))
        .hoop(inject(State::from_app_context(app)))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("{product}").put(products::update::handler)),
        )
        .push(Router::with_path("transactions").post(transactions::create::handler))
        .push(
            Router::with_path("reports")
                .push(Router::with_path("inventory").get(reports::inventory::handler))
                .push(Router::with_path("sales-per-month").get(reports::sales_per_month::handler))
                .push(
                    Router::with_path("sales-per-category")
                        .get(reports::sales_per_category::handler),
                )
                .push(Router::with_path("top-products").get(reports::top_products::handler))
                .push(Router::with_path("low-stock").get(reports::low_stock::handler)),
        );

    let doc = OpenApi::new("Stockroom API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router).hoop(cors).catcher(fallback::catcher());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(service).await;
}
