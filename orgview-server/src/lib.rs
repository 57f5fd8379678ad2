// Copyright 2026 Orgview Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod api;
pub mod client;
pub mod config;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orgview_core::{OntologyExpander, Projector};

use api::{build_info, get_organisation, good_to_go, health_check, ping, AppState};
use client::ConceptsClient;
use config::ServerConfig;

/// Build the service router. Split out from [`run_server`] so tests can
/// drive it with an injected provider.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/organisations/:uuid", get(get_organisation))
        .route("/__health", get(health_check))
        .route("/__gtg", get(good_to_go))
        .route("/__ping", get(ping))
        .route("/ping", get(ping))
        .route("/__build-info", get(build_info))
        .route("/build-info", get(build_info))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orgview_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Orgview Server");
    config.validate()?;

    let provider = Arc::new(ConceptsClient::new(&config.upstream)?);
    let projector = Arc::new(Projector::new(provider, Arc::new(OntologyExpander)));
    let state = AppState {
        projector,
        cache_control: config.cache_control(),
    };

    let app = build_router(state, Duration::from_secs(config.server.request_timeout_secs));

    let addr = config.socket_addr()?;
    tracing::info!("HTTP API listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
