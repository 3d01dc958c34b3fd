use crate::api::HttpDirectoryApi;
use crate::app_state::AppContext;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod controller;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod templates;
mod view;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ltc_search=info")),
        )
        .init();

    let settings = config::load_settings();

    // 1️⃣ Backend client
    let api = match HttpDirectoryApi::new(&settings.api_base, settings.request_timeout) {
        Ok(api) => api,
        Err(e) => {
            tracing::error!(error = %e, "cannot build directory api client");
            std::process::exit(1);
        }
    };

    // 2️⃣ Application context; the city list is shared by every session
    let ctx = AppContext::new(api, &settings);
    match ctx.load_cities() {
        Ok(cities) => tracing::info!(count = cities.len(), "city list cached"),
        Err(e) => tracing::warn!(api_base = %settings.api_base, error = %e, "starting without city list"),
    }

    // 3️⃣ Start the server
    let addr: SocketAddr = match settings.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(bind_addr = %settings.bind_addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, api_base = %settings.api_base, "starting server");

    let server = Server::bind(&addr).max_workers(settings.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
