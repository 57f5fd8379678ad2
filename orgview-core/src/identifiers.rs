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

//! Identifier URIs.
//!
//! Every entity is addressed by a uuid. The public `id` is always the things
//! URI for that uuid; `apiUrl` depends on where the entity's direct type sits
//! in the ontology (organisations get the organisations endpoint, everything
//! else falls back to things).

use std::sync::OnceLock;

use regex::Regex;

use crate::taxonomy;

const THINGS_URL_PREFIX: &str = "http://api.ft.com/things/";
const ORGANISATIONS_URL_PREFIX: &str = "http://api.ft.com/organisations/";

const UUID_PATTERN: &str = "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}";

fn uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(UUID_PATTERN).expect("uuid pattern is valid"))
}

fn full_uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("^{UUID_PATTERN}$")).expect("uuid pattern is valid")
    })
}

/// Whether `candidate` is a well-formed lowercase uuid.
pub fn is_valid_uuid(candidate: &str) -> bool {
    full_uuid_regex().is_match(candidate)
}

/// Extract the first uuid segment from an identifier URI, if any.
pub fn uuid_of(uri: &str) -> Option<&str> {
    uuid_regex().find(uri).map(|m| m.as_str())
}

/// The canonical things URI for a uuid.
pub fn id_url(uuid: &str) -> String {
    format!("{THINGS_URL_PREFIX}{uuid}")
}

/// The read endpoint URI for a uuid, picked by its direct ontology type.
pub fn api_url(uuid: &str, direct_type: &str) -> String {
    if taxonomy::is_organisation_type(direct_type) {
        format!("{ORGANISATIONS_URL_PREFIX}{uuid}")
    } else {
        format!("{THINGS_URL_PREFIX}{uuid}")
    }
}
