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

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use orgview_core::{OrgError, Projection};

use crate::api::{ApiError, AppState};

const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";

/// GET /organisations/:uuid
pub async fn get_organisation(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<Response, ApiError> {
    let request_path = format!("/organisations/{uuid}");

    match state.projector.project(&uuid, &request_path).await {
        Ok(Projection::Organisation(organisation)) => {
            let mut response = Json(organisation).into_response();
            let headers = response.headers_mut();
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(CONTENT_TYPE_JSON),
            );
            if let Ok(value) = HeaderValue::from_str(&state.cache_control) {
                headers.insert(header::CACHE_CONTROL, value);
            }
            Ok(response)
        }
        Ok(Projection::Redirect { location }) => {
            let location = HeaderValue::from_str(&location).map_err(|_| ApiError::Internal)?;
            Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
        }
        Err(err) => {
            match &err {
                OrgError::InvalidInput(_) | OrgError::NotFound => {
                    debug!(identifier = %uuid, %err, "organisation request rejected");
                }
                OrgError::DataIntegrity { .. } => {
                    error!(identifier = %uuid, %err, "integrity violation while reading organisation");
                }
                OrgError::UpstreamUnavailable(_)
                | OrgError::MalformedPayload(_)
                | OrgError::TypeHierarchy(_) => {
                    error!(identifier = %uuid, %err, "failed to return organisation");
                }
            }
            Err(ApiError::from(err))
        }
    }
}
