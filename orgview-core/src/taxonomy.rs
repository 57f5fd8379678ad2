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

//! Ontology type hierarchy.
//!
//! Every entity reference in the public view carries its direct type plus the
//! full ancestor chain, ordered most general to most specific. Expansion is a
//! seam: the pipeline only depends on the [`TypeHierarchy`] trait, with
//! [`OntologyExpander`] as the built-in implementation over the fixed
//! ontology table. A failed expansion aborts the whole projection.

use crate::error::{OrgError, Result};

pub const THING: &str = "http://www.ft.com/ontology/core/Thing";
pub const CONCEPT: &str = "http://www.ft.com/ontology/concept/Concept";
pub const ORGANISATION: &str = "http://www.ft.com/ontology/organisation/Organisation";
pub const COMPANY: &str = "http://www.ft.com/ontology/company/Company";
pub const PUBLIC_COMPANY: &str = "http://www.ft.com/ontology/company/public/PublicCompany";
pub const PRIVATE_COMPANY: &str = "http://www.ft.com/ontology/company/private/PrivateCompany";
pub const FINANCIAL_INSTRUMENT: &str = "http://www.ft.com/ontology/FinancialInstrument";

/// Ancestor chains, most general first, ending in the direct type itself.
/// The table is closed: an unlisted direct type is an expansion failure.
const HIERARCHY: &[(&str, &[&str])] = &[
    (THING, &[THING]),
    (CONCEPT, &[THING, CONCEPT]),
    (ORGANISATION, &[THING, CONCEPT, ORGANISATION]),
    (COMPANY, &[THING, CONCEPT, ORGANISATION, COMPANY]),
    (PUBLIC_COMPANY, &[THING, CONCEPT, ORGANISATION, COMPANY, PUBLIC_COMPANY]),
    (PRIVATE_COMPANY, &[THING, CONCEPT, ORGANISATION, COMPANY, PRIVATE_COMPANY]),
    (FINANCIAL_INSTRUMENT, &[THING, CONCEPT, FINANCIAL_INSTRUMENT]),
];

/// Expansion of one direct ontology type URI into its ordered ancestor chain.
pub trait TypeHierarchy: Send + Sync {
    fn expand(&self, direct_type: &str) -> Result<Vec<String>>;
}

/// Built-in expander over the fixed ontology table.
#[derive(Debug, Default, Clone, Copy)]
pub struct OntologyExpander;

impl TypeHierarchy for OntologyExpander {
    fn expand(&self, direct_type: &str) -> Result<Vec<String>> {
        HIERARCHY
            .iter()
            .find(|(uri, _)| *uri == direct_type)
            .map(|(_, chain)| chain.iter().map(|s| s.to_string()).collect())
            .ok_or_else(|| OrgError::TypeHierarchy(format!("unknown direct type '{direct_type}'")))
    }
}

/// Whether a direct type URI sits in the organisation branch of the ontology.
pub fn is_organisation_type(direct_type: &str) -> bool {
    matches!(direct_type, ORGANISATION | COMPANY | PUBLIC_COMPANY | PRIVATE_COMPANY)
}

/// Map a bare graph node label (e.g. `Organisation`) to its ontology URI.
pub fn label_uri(label: &str) -> Option<&'static str> {
    match label {
        "Thing" => Some(THING),
        "Concept" => Some(CONCEPT),
        "Organisation" => Some(ORGANISATION),
        "Company" => Some(COMPANY),
        "PublicCompany" => Some(PUBLIC_COMPANY),
        "PrivateCompany" => Some(PRIVATE_COMPANY),
        "FinancialInstrument" => Some(FINANCIAL_INSTRUMENT),
        _ => None,
    }
}

/// The most specific ontology type among a set of graph node labels, judged
/// by ancestor chain length. Unknown labels are ignored.
pub fn most_specific(labels: &[String]) -> Option<&'static str> {
    labels
        .iter()
        .filter_map(|l| label_uri(l))
        .max_by_key(|uri| {
            HIERARCHY
                .iter()
                .find(|(h, _)| h == uri)
                .map(|(_, chain)| chain.len())
                .unwrap_or(0)
        })
}
