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

//! The stable, versioned public view.
//!
//! Every optional field is omitted when empty. The structs are request-scoped
//! values: assembled once per request, serialized, discarded.

use serde::{Deserialize, Serialize};

fn is_false(v: &bool) -> bool {
    !v
}

/// Base identity triple shared by every entity reference in output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thing {
    pub id: String,
    pub api_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pref_label: String,
}

/// The public organisation representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organisation {
    #[serde(flatten)]
    pub thing: Thing,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub proper_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hidden_label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub former_names: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_of_incorporation: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_founded: Option<u32>,
    /// Full ancestor chain, never empty for a found entity.
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub direct_type: String,
    /// Deduplicated display labels, first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(rename = "leiCode", default, skip_serializing_if = "String::is_empty")]
    pub legal_entity_identifier: String,
    #[serde(rename = "parentOrganisation", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Parent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsidiaries: Vec<Subsidiary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_instrument: Option<FinancialInstrument>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_deprecated: bool,
}

/// Lightweight view of the parent organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    #[serde(flatten)]
    pub thing: Thing,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub direct_type: String,
}

/// Lightweight view of a subsidiary organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsidiary {
    #[serde(flatten)]
    pub thing: Thing,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub direct_type: String,
}

/// The instrument issued by the organisation, carrying its FIGI code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInstrument {
    #[serde(flatten)]
    pub thing: Thing,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub direct_type: String,
    #[serde(rename = "FIGI", default, skip_serializing_if = "String::is_empty")]
    pub figi: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_when_empty() {
        let org = Organisation {
            thing: Thing {
                id: "http://api.ft.com/things/u1".to_string(),
                api_url: "http://api.ft.com/organisations/u1".to_string(),
                pref_label: "Acme".to_string(),
            },
            types: vec!["t".to_string()],
            ..Organisation::default()
        };
        let json = serde_json::to_value(&org).unwrap();
        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["apiUrl", "id", "prefLabel", "types"]);
    }

    #[test]
    fn lei_and_figi_use_their_wire_names() {
        let org = Organisation {
            thing: Thing::default(),
            legal_entity_identifier: "LEI123".to_string(),
            financial_instrument: Some(FinancialInstrument {
                figi: "BBG0".to_string(),
                ..FinancialInstrument::default()
            }),
            ..Organisation::default()
        };
        let json = serde_json::to_value(&org).unwrap();
        assert_eq!(json["leiCode"], "LEI123");
        assert_eq!(json["financialInstrument"]["FIGI"], "BBG0");
    }

    #[test]
    fn is_deprecated_serializes_only_when_set() {
        let mut org = Organisation::default();
        assert!(serde_json::to_value(&org).unwrap().get("isDeprecated").is_none());
        org.is_deprecated = true;
        assert_eq!(serde_json::to_value(&org).unwrap()["isDeprecated"], true);
    }
}
