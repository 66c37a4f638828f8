//! Documentation of the findeasy places backend.
//!
//! Stores places (name, address, GeoJSON point, parking zone aliases) in
//! MongoDB and serves them over a small HTTP API.
//!
//!
//!
//! # Endpoints
//!
//! - `GET /places/` — every stored place
//! - `GET /places/{place_id}` — one place by id
//! - `GET /places_near?lat=..&lon=..&max_distance=..` — places within
//!   `max_distance` meters (default 500) of a point, nearest first via the
//!   `2dsphere` index
//! - `GET /places/{place_id}/{parking_zone}/download` — redirect to the
//!   zone's parking map package
//! - `POST /places/` and `DELETE /places/{place_id}` — switched off, both
//!   answer 405
//!
//! Interactive docs live under `/eefoox/docs` (spec at
//! `/eefoox/openapi.json`). The odd prefix keeps crawlers off the docs, it
//! is not an access control.
//!
//!
//!
//! # Environment
//!
//! | Variable      | Default                      |
//! |---------------|------------------------------|
//! | `MONGODB_URI` | `mongodb://localhost:27017`  |
//! | `HOST_IP`     | `xoofee.top`                 |
//! | `HOST`        | `0.0.0.0`                    |
//! | `PORT`        | `5001`                       |
//!
//! `HOST_IP` is the public host baked into download URLs, `HOST`/`PORT` is
//! the bind address.
//!
//!
//!
//! # Setup
//!
//! Run against a local MongoDB.
//! ```sh
//! cargo run
//! ```
//!
//! Sample near query (番禺天河城坐标).
//! ```sh
//! curl 'http://localhost:5001/places_near?lat=23.0061835&lon=113.3431710&max_distance=500'
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod database;
pub mod docs;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use docs::ApiDoc;
use routes::{
    create_place, delete_place, generate_download_url, get_all_places, get_nearby_places,
    get_place,
};
use state::State;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = State::new().await;

    info!("Starting server...");

    let address = format!("{}:{}", state.config.host, state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/places/", get(get_all_places).post(create_place))
        .route("/places/{place_id}", get(get_place).delete(delete_place))
        .route("/places_near", get(get_nearby_places))
        .route(
            "/places/{place_id}/{parking_zone}/download",
            get(generate_download_url),
        )
        .merge(SwaggerUi::new("/eefoox/docs").url("/eefoox/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
