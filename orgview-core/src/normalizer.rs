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

//! Raw result normalization.
//!
//! The upstream has answered with one of several historical schema shapes.
//! Variants are attempted in a fixed priority order, newest first; the first
//! positive match wins and later variants are never tried. No match in any
//! variant is "not found", not an error. More than one row for one
//! identifier is an integrity violation and is never silently resolved.

use serde_json::Value;

use crate::error::{OrgError, Result};
use crate::identifiers;
use crate::labels::LabelSuffixes;
use crate::raw::{ConceptPayload, GraphNode, GraphRowV1, GraphRowV2, RawRelatedConcept, TypedLabel};
use crate::taxonomy;

const ALIAS_TYPE: &str = "http://www.ft.com/ontology/Alias";

/// Scalar fields of the requested organisation, shape-independent.
#[derive(Debug, Clone, Default)]
pub struct NormalizedCore {
    /// Canonical identifier, always a full things URI.
    pub id: String,
    pub uuid: String,
    pub pref_label: String,
    /// Direct ontology type URI.
    pub direct_type: String,
    pub typed_labels: Vec<TypedLabel>,
    pub country_code: String,
    pub country_of_incorporation: String,
    pub postal_code: String,
    pub year_founded: Option<u32>,
    pub is_deprecated: bool,
}

/// A normalized reference to a related entity. Absence of an optional
/// relationship is an empty uuid, regardless of the raw shape that carried it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConceptRef {
    pub uuid: String,
    pub pref_label: String,
    pub direct_type: String,
    pub figi: String,
}

impl ConceptRef {
    fn from_graph_node(node: &GraphNode) -> Option<Self> {
        if node.id.is_empty() {
            return None;
        }
        Some(Self {
            uuid: node.id.clone(),
            pref_label: node.pref_label.clone(),
            direct_type: taxonomy::most_specific(&node.types)
                .unwrap_or_default()
                .to_string(),
            figi: String::new(),
        })
    }
}

/// The single internal record every schema variant converges on.
#[derive(Debug, Clone, Default)]
pub struct NormalizedOrganisation {
    pub core: NormalizedCore,
    pub industry_classification: Option<ConceptRef>,
    pub legal_entity_identifier: String,
    /// Relationships the raw shape had already resolved (graph schemas).
    pub parent: Option<ConceptRef>,
    pub subsidiaries: Vec<ConceptRef>,
    pub financial_instruments: Vec<ConceptRef>,
    /// Unclassified relationships (concept schema); partitioned later.
    pub related_concepts: Vec<RawRelatedConcept>,
    /// Label-type suffix set matching this variant's casing convention.
    pub label_suffixes: LabelSuffixes,
}

type Attempt = fn(&str, &Value) -> Result<Option<NormalizedOrganisation>>;

/// Schema variants, newest first. Adding a schema is adding a row here.
const VARIANTS: &[(&str, Attempt)] = &[
    ("concept", from_concept_payload),
    ("graph-v2", from_graph_v2),
    ("graph-v1", from_graph_v1),
];

/// Convert whichever raw schema shape was returned into the internal record.
pub fn normalize(identifier: &str, raw: &Value) -> Result<Option<NormalizedOrganisation>> {
    for (name, attempt) in VARIANTS {
        if let Some(record) = attempt(identifier, raw)? {
            tracing::debug!(identifier, schema = name, "raw record matched schema variant");
            return Ok(Some(record));
        }
    }
    Ok(None)
}

fn from_concept_payload(_identifier: &str, raw: &Value) -> Result<Option<NormalizedOrganisation>> {
    // Marker: concept payloads are objects carrying a "type" field.
    if !raw.is_object() || raw.get("type").is_none() {
        return Ok(None);
    }
    let payload: ConceptPayload = serde_json::from_value(raw.clone())
        .map_err(|e| OrgError::MalformedPayload(e.to_string()))?;

    // A resolvable concept of a non-organisation type is not an organisation.
    if payload.id.is_empty() || !taxonomy::is_organisation_type(&payload.direct_type) {
        return Ok(None);
    }

    let uuid = identifiers::uuid_of(&payload.id)
        .unwrap_or(payload.id.as_str())
        .to_string();

    Ok(Some(NormalizedOrganisation {
        core: NormalizedCore {
            id: payload.id.clone(),
            uuid,
            pref_label: payload.pref_label,
            direct_type: payload.direct_type,
            typed_labels: payload.alternative_labels,
            country_code: payload.country_code,
            country_of_incorporation: payload.country_of_incorporation,
            postal_code: payload.postal_code,
            year_founded: payload.year_founded,
            is_deprecated: payload.is_deprecated,
        },
        legal_entity_identifier: payload.lei_code,
        related_concepts: payload.related_concepts,
        label_suffixes: LabelSuffixes::concept_schema(),
        ..NormalizedOrganisation::default()
    }))
}

fn graph_rows<'a>(identifier: &str, raw: &'a Value, marker_keys: &[&str]) -> Result<Option<&'a Value>> {
    let Some(rows) = raw.as_array() else {
        return Ok(None);
    };
    let matching: Vec<&Value> = rows
        .iter()
        .filter(|row| marker_keys.iter().all(|k| row.get(k).is_some()))
        .collect();
    match matching.len() {
        0 => Ok(None),
        1 => Ok(Some(matching[0])),
        n => Err(OrgError::DataIntegrity {
            identifier: identifier.to_string(),
            rows: n,
        }),
    }
}

fn graph_core(node: &GraphNode) -> Option<NormalizedCore> {
    if node.id.is_empty() {
        return None;
    }
    let direct_type = taxonomy::most_specific(&node.types)?;
    if !taxonomy::is_organisation_type(direct_type) {
        return None;
    }
    Some(NormalizedCore {
        id: identifiers::id_url(&node.id),
        uuid: node.id.clone(),
        pref_label: node.pref_label.clone(),
        direct_type: direct_type.to_string(),
        typed_labels: node
            .labels
            .iter()
            .map(|v| TypedLabel::new(ALIAS_TYPE, v.clone()))
            .collect(),
        ..NormalizedCore::default()
    })
}

fn from_graph_v2(identifier: &str, raw: &Value) -> Result<Option<NormalizedOrganisation>> {
    // The v2 query always emits the lei and fi projections, even when empty.
    let Some(row) = graph_rows(identifier, raw, &["o", "lei", "fi"])? else {
        return Ok(None);
    };
    let row: GraphRowV2 =
        serde_json::from_value(row.clone()).map_err(|e| OrgError::MalformedPayload(e.to_string()))?;
    let Some(core) = graph_core(&row.o) else {
        return Ok(None);
    };

    let financial_instruments = if row.fi.id.is_empty() {
        Vec::new()
    } else {
        vec![ConceptRef {
            uuid: row.fi.id.clone(),
            pref_label: row.fi.pref_label.clone(),
            direct_type: taxonomy::most_specific(&row.fi.types)
                .unwrap_or(taxonomy::FINANCIAL_INSTRUMENT)
                .to_string(),
            figi: row.fi.figi.clone(),
        }]
    };

    Ok(Some(NormalizedOrganisation {
        core,
        industry_classification: ConceptRef::from_graph_node(&row.ind),
        legal_entity_identifier: row.lei.legal_entity_identifier,
        parent: ConceptRef::from_graph_node(&row.parent),
        subsidiaries: row.sub.iter().filter_map(ConceptRef::from_graph_node).collect(),
        financial_instruments,
        related_concepts: Vec::new(),
        label_suffixes: LabelSuffixes::graph_schema(),
    }))
}

fn from_graph_v1(identifier: &str, raw: &Value) -> Result<Option<NormalizedOrganisation>> {
    let Some(row) = graph_rows(identifier, raw, &["o"])? else {
        return Ok(None);
    };
    let row: GraphRowV1 =
        serde_json::from_value(row.clone()).map_err(|e| OrgError::MalformedPayload(e.to_string()))?;
    let Some(core) = graph_core(&row.o) else {
        return Ok(None);
    };

    Ok(Some(NormalizedOrganisation {
        core,
        industry_classification: ConceptRef::from_graph_node(&row.ind),
        parent: ConceptRef::from_graph_node(&row.parent),
        subsidiaries: row.sub.iter().filter_map(ConceptRef::from_graph_node).collect(),
        label_suffixes: LabelSuffixes::graph_schema(),
        ..NormalizedOrganisation::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const UUID: &str = "7c5218a0-3755-463e-abbc-1a1632cfd1da";

    fn concept_payload() -> Value {
        json!({
            "id": format!("http://api.ft.com/things/{UUID}"),
            "apiUrl": format!("http://api.ft.com/concepts/{UUID}"),
            "type": taxonomy::ORGANISATION,
            "prefLabel": "Acme Corp",
            "leiCode": "LEI123",
            "alternativeLabels": [
                {"type": "http://www.ft.com/ontology/ShortName", "value": "Acme"}
            ],
            "relatedConcepts": [
                {
                    "concept": {"id": "x", "type": taxonomy::ORGANISATION},
                    "predicate": "http://www.ft.com/ontology/subOrganisationOf"
                }
            ]
        })
    }

    fn graph_v2_rows() -> Value {
        json!([{
            "o": {
                "id": UUID,
                "types": ["Thing", "Concept", "Organisation"],
                "prefLabel": "Acme Corp",
                "labels": ["Acme", "Acme Corp"]
            },
            "lei": {"legalEntityIdentifier": "LEI123"},
            "ind": {},
            "parent": {"id": "p1", "types": ["Organisation"], "prefLabel": "Parent"},
            "sub": [
                {"id": "s1", "types": ["Organisation"], "prefLabel": "Sub"},
                {"id": "", "types": [], "prefLabel": ""}
            ],
            "fi": {"id": "f1", "types": ["FinancialInstrument"], "prefLabel": "Acme Shares", "figi": "BBG0"}
        }])
    }

    #[test]
    fn concept_schema_is_preferred_and_normalizes() {
        let record = normalize(UUID, &concept_payload()).unwrap().unwrap();
        assert_eq!(record.core.uuid, UUID);
        assert_eq!(record.core.direct_type, taxonomy::ORGANISATION);
        assert_eq!(record.legal_entity_identifier, "LEI123");
        assert_eq!(record.related_concepts.len(), 1);
        assert!(record.parent.is_none());
    }

    #[test]
    fn non_organisation_concept_is_not_found() {
        let payload = json!({
            "id": format!("http://api.ft.com/things/{UUID}"),
            "type": "http://www.ft.com/ontology/person/Person",
            "prefLabel": "Not an organisation"
        });
        assert!(normalize(UUID, &payload).unwrap().is_none());
    }

    #[test]
    fn graph_v2_rows_normalize_with_empty_id_sentinels_dropped() {
        let record = normalize(UUID, &graph_v2_rows()).unwrap().unwrap();
        assert_eq!(record.core.id, format!("http://api.ft.com/things/{UUID}"));
        assert_eq!(record.parent.as_ref().unwrap().uuid, "p1");
        assert_eq!(record.subsidiaries.len(), 1);
        assert_eq!(record.financial_instruments.len(), 1);
        assert_eq!(record.financial_instruments[0].figi, "BBG0");
        // node aliases become typed labels
        assert_eq!(record.core.typed_labels.len(), 2);
    }

    #[test]
    fn multiple_rows_are_an_integrity_error() {
        let mut rows = graph_v2_rows();
        let dup = rows.as_array().unwrap()[0].clone();
        rows.as_array_mut().unwrap().push(dup);
        let err = normalize(UUID, &rows).unwrap_err();
        assert!(matches!(err, OrgError::DataIntegrity { rows: 2, .. }));
    }

    #[test]
    fn graph_v1_rows_match_when_v2_markers_are_absent() {
        let rows = json!([{
            "o": {"id": UUID, "types": ["Organisation"], "prefLabel": "Acme"},
            "ind": {},
            "parent": {},
            "sub": []
        }]);
        let record = normalize(UUID, &rows).unwrap().unwrap();
        assert!(record.financial_instruments.is_empty());
        assert!(record.legal_entity_identifier.is_empty());
        assert!(record.parent.is_none());
    }

    #[test]
    fn no_variant_matching_is_not_found_not_an_error() {
        assert!(normalize(UUID, &json!({"unrelated": true})).unwrap().is_none());
        assert!(normalize(UUID, &json!([])).unwrap().is_none());
    }

    #[test]
    fn undecodable_concept_payload_is_malformed() {
        // marker present but the shape contradicts the schema
        let payload = json!({"type": taxonomy::ORGANISATION, "alternativeLabels": "oops"});
        let err = normalize(UUID, &payload).unwrap_err();
        assert!(matches!(err, OrgError::MalformedPayload(_)));
    }
}
