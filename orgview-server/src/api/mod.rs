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

pub mod health;
pub mod organisations;

pub use health::{build_info, good_to_go, health_check, ping};
pub use organisations::get_organisation;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use orgview_core::{OrgError, Projector};

/// API error type. Internal causes never leak into response bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("uuid '{0}' is either missing or invalid")]
    InvalidUuid(String),

    #[error("organisation not found")]
    NotFound,

    #[error("failed to return organisation")]
    Internal,
}

impl From<OrgError> for ApiError {
    fn from(err: OrgError) -> Self {
        match err {
            OrgError::InvalidInput(id) => ApiError::InvalidUuid(id),
            OrgError::NotFound => ApiError::NotFound,
            OrgError::UpstreamUnavailable(_)
            | OrgError::DataIntegrity { .. }
            | OrgError::MalformedPayload(_)
            | OrgError::TypeHierarchy(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidUuid(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();
        (status, Json(ErrorResponse { message })).into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub projector: Arc<Projector>,
    /// Preformatted Cache-Control value for successful reads.
    pub cache_control: String,
}
