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

use thiserror::Error;

/// Errors raised by the projection pipeline and its collaborators.
///
/// Validation failures are detected before any I/O; everything else maps to a
/// generic, non-leaking 500 at the HTTP boundary while the concrete cause is
/// logged with the requested identifier.
#[derive(Debug, Error)]
pub enum OrgError {
    /// The requested identifier fails format validation.
    #[error("identifier '{0}' is either missing or invalid")]
    InvalidInput(String),

    /// The provider reports no match in any schema variant.
    #[error("organisation not found")]
    NotFound,

    /// Provider-level I/O failure.
    #[error("upstream concept service unavailable: {0}")]
    UpstreamUnavailable(String),

    /// More than one canonical record matched one identifier. Never silently
    /// resolved by picking one row.
    #[error("ambiguous identity: {rows} records matched identifier '{identifier}'")]
    DataIntegrity { identifier: String, rows: usize },

    /// The provider response could not be decoded.
    #[error("malformed upstream payload: {0}")]
    MalformedPayload(String),

    /// Type hierarchy expansion failed for a referenced entity. Aborts the
    /// whole projection.
    #[error("type hierarchy expansion failed: {0}")]
    TypeHierarchy(String),
}

pub type Result<T> = std::result::Result<T, OrgError>;
