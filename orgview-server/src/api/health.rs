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

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use tracing::debug;

use crate::api::AppState;

/// Health check response structure
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: Vec<CheckResult>,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub ok: bool,
    pub output: String,
}

/// GET /__health - reports on the concepts service connectivity
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");

    let check = match state.projector.check_connectivity().await {
        Ok(()) => CheckResult {
            name: "concepts-api-connectivity".to_string(),
            ok: true,
            output: "connectivity to the concepts api is ok".to_string(),
        },
        Err(err) => CheckResult {
            name: "concepts-api-connectivity".to_string(),
            ok: false,
            output: err.to_string(),
        },
    };

    let healthy = check.ok;
    let health = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: vec![check],
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(health))
}

/// GET /__gtg - good-to-go probe for load balancers
pub async fn good_to_go(State(state): State<AppState>) -> impl IntoResponse {
    match state.projector.check_connectivity().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "gtg failed"),
    }
}

/// GET /__ping - liveness probe, no upstream involved
pub async fn ping() -> &'static str {
    "pong"
}

#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub name: String,
    pub version: String,
}

/// GET /__build-info
pub async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
