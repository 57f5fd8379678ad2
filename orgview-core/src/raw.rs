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

//! Raw upstream schema shapes.
//!
//! Three historical variants exist. The canonical one is the concept-service
//! payload ([`ConceptPayload`]); the two older ones are graph query row
//! shapes ([`GraphRowV2`], [`GraphRowV1`]) delivered as a one-element array
//! per identifier. All fields default so a variant can be attempted against
//! any value without failing on absent keys; the normalizer decides whether
//! an attempt actually matched.

use serde::Deserialize;

/// One typed label entry from the concept payload, e.g.
/// `{"type": ".../ShortName", "value": "Nintendo"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TypedLabel {
    #[serde(rename = "type", default)]
    pub label_type: String,
    #[serde(default)]
    pub value: String,
}

impl TypedLabel {
    pub fn new(label_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label_type: label_type.into(),
            value: value.into(),
        }
    }
}

/// An entity reference inside the concept payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConcept {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub pref_label: String,
    #[serde(rename = "type", default)]
    pub direct_type: String,
    #[serde(rename = "figiCode", default)]
    pub figi: String,
}

/// The unclassified relationship unit: a referenced concept plus the
/// predicate URI naming how it relates to the requested organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRelatedConcept {
    #[serde(default)]
    pub concept: RawConcept,
    #[serde(default)]
    pub predicate: String,
}

/// The canonical concept-service payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptPayload {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub api_url: String,
    #[serde(default)]
    pub pref_label: String,
    #[serde(rename = "type", default)]
    pub direct_type: String,
    #[serde(default)]
    pub alternative_labels: Vec<TypedLabel>,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_of_incorporation: String,
    #[serde(rename = "leiCode", default)]
    pub lei_code: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub year_founded: Option<u32>,
    #[serde(default)]
    pub is_deprecated: bool,
    #[serde(default)]
    pub related_concepts: Vec<RawRelatedConcept>,
}

/// A node as returned by the graph read queries: bare uuid plus node labels.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub pref_label: String,
    /// Alias strings stored directly on the node (older schema only).
    #[serde(default)]
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphLei {
    #[serde(default)]
    pub legal_entity_identifier: String,
}

/// Financial instrument node with its FIGI identifier value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphInstrument {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub pref_label: String,
    #[serde(rename = "figi", default)]
    pub figi: String,
}

/// Second-generation graph row: organisation plus lei, industry
/// classification, parent, subsidiaries and issued instrument.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphRowV2 {
    #[serde(default)]
    pub o: GraphNode,
    #[serde(default)]
    pub lei: GraphLei,
    #[serde(default)]
    pub ind: GraphNode,
    #[serde(default)]
    pub parent: GraphNode,
    #[serde(default)]
    pub sub: Vec<GraphNode>,
    #[serde(default)]
    pub fi: GraphInstrument,
}

/// First-generation graph row. No lei and no instrument; the relationship
/// set is parent, subsidiaries and industry classification only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphRowV1 {
    #[serde(default)]
    pub o: GraphNode,
    #[serde(default)]
    pub ind: GraphNode,
    #[serde(default)]
    pub parent: GraphNode,
    #[serde(default)]
    pub sub: Vec<GraphNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concept_payload_tolerates_missing_optionals() {
        let payload: ConceptPayload = serde_json::from_str(
            r#"{"id": "http://api.ft.com/things/u1", "type": "t", "prefLabel": "Acme"}"#,
        )
        .unwrap();
        assert_eq!(payload.pref_label, "Acme");
        assert!(payload.alternative_labels.is_empty());
        assert!(payload.related_concepts.is_empty());
        assert_eq!(payload.year_founded, None);
    }

    #[test]
    fn related_concept_decodes_predicate_and_figi() {
        let related: RawRelatedConcept = serde_json::from_str(
            r#"{
                "concept": {"id": "u2", "type": "fi", "figiCode": "BBG0"},
                "predicate": "http://www.ft.com/ontology/issued"
            }"#,
        )
        .unwrap();
        assert_eq!(related.concept.figi, "BBG0");
        assert!(related.predicate.ends_with("issued"));
    }

    #[test]
    fn graph_row_defaults_absent_relations_to_empty_sentinels() {
        let row: GraphRowV2 = serde_json::from_str(
            r#"{"o": {"id": "u1", "types": ["Organisation"], "prefLabel": "Acme"}}"#,
        )
        .unwrap();
        assert_eq!(row.o.id, "u1");
        assert!(row.parent.id.is_empty());
        assert!(row.fi.id.is_empty());
        assert!(row.sub.is_empty());
    }
}
