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

//! Canonicalization.
//!
//! Alias identifiers resolve to an entity stored under a different canonical
//! identifier. When that happens the outcome is a redirect to the canonical
//! path and nothing further runs; a redirect is terminal.

use crate::error::{OrgError, Result};
use crate::identifiers;

/// Outcome of comparing the requested identifier to the resolved one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The requested identifier is canonical; carry on projecting.
    Canonical,
    /// The caller should be pointed at the canonical path instead.
    Redirect { canonical_path: String },
}

/// Decide whether `requested` is the canonical identifier of the entity whose
/// resolved identifier URI is `resolved_id`. On mismatch the canonical path
/// is the request path with the alias segment swapped for the uuid extracted
/// from `resolved_id`.
pub fn resolve(requested: &str, resolved_id: &str, request_path: &str) -> Result<Resolution> {
    if resolved_id.contains(requested) {
        return Ok(Resolution::Canonical);
    }
    let canonical = identifiers::uuid_of(resolved_id).ok_or_else(|| {
        OrgError::MalformedPayload(format!(
            "resolved identifier '{resolved_id}' carries no recognizable uuid"
        ))
    })?;
    Ok(Resolution::Redirect {
        canonical_path: request_path.replace(requested, canonical),
    })
}
