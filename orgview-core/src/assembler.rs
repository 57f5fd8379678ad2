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

//! Public view assembly.
//!
//! Pure combination of the normalized core, the classified relationships,
//! the expanded type hierarchies and the label projection. No I/O and no
//! error paths of its own; every failure mode has already surfaced upstream.

use crate::identifiers;
use crate::labels::LabelProjection;
use crate::model::{FinancialInstrument, Organisation, Parent, Subsidiary, Thing};
use crate::normalizer::{ConceptRef, NormalizedOrganisation};
use crate::relationship::ClassifiedRelations;

/// Pre-expanded ancestor chains for every entity reference in the output,
/// positionally aligned with [`ClassifiedRelations`].
#[derive(Debug, Clone, Default)]
pub struct ExpandedTypes {
    pub organisation: Vec<String>,
    pub parent: Vec<String>,
    pub subsidiaries: Vec<Vec<String>>,
    pub financial_instrument: Vec<String>,
}

fn thing_of(entity: &ConceptRef) -> Thing {
    Thing {
        id: identifiers::id_url(&entity.uuid),
        api_url: identifiers::api_url(&entity.uuid, &entity.direct_type),
        pref_label: entity.pref_label.clone(),
    }
}

/// Combine the pipeline products into the immutable response value.
pub fn assemble(
    record: &NormalizedOrganisation,
    relations: &ClassifiedRelations,
    labels: &LabelProjection,
    expanded: &ExpandedTypes,
) -> Organisation {
    let core = &record.core;

    let parent = relations.parent.as_ref().map(|p| Parent {
        thing: thing_of(p),
        types: expanded.parent.clone(),
        direct_type: p.direct_type.clone(),
    });

    let subsidiaries = relations
        .subsidiaries
        .iter()
        .zip(&expanded.subsidiaries)
        .map(|(s, types)| Subsidiary {
            thing: thing_of(s),
            types: types.clone(),
            direct_type: s.direct_type.clone(),
        })
        .collect();

    let financial_instrument = relations.financial_instrument.as_ref().map(|fi| {
        FinancialInstrument {
            thing: thing_of(fi),
            types: expanded.financial_instrument.clone(),
            direct_type: fi.direct_type.clone(),
            figi: fi.figi.clone(),
        }
    });

    Organisation {
        thing: Thing {
            id: identifiers::id_url(&core.uuid),
            api_url: identifiers::api_url(&core.uuid, &core.direct_type),
            pref_label: core.pref_label.clone(),
        },
        proper_name: labels.proper_name.clone(),
        short_name: labels.short_name.clone(),
        hidden_label: labels.hidden_label.clone(),
        former_names: labels.former_names.clone(),
        country_code: core.country_code.clone(),
        country_of_incorporation: core.country_of_incorporation.clone(),
        postal_code: core.postal_code.clone(),
        year_founded: core.year_founded,
        types: expanded.organisation.clone(),
        direct_type: core.direct_type.clone(),
        labels: labels.display.clone(),
        legal_entity_identifier: record.legal_entity_identifier.clone(),
        parent,
        subsidiaries,
        financial_instrument,
        is_deprecated: core.is_deprecated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::NormalizedCore;
    use crate::taxonomy;

    const UUID: &str = "7c5218a0-3755-463e-abbc-1a1632cfd1da";
    const SUB: &str = "1b070fbb-6331-3225-bb57-9108deb67df4";

    fn minimal_record() -> NormalizedOrganisation {
        NormalizedOrganisation {
            core: NormalizedCore {
                id: identifiers::id_url(UUID),
                uuid: UUID.to_string(),
                pref_label: "Acme Corp".to_string(),
                direct_type: taxonomy::ORGANISATION.to_string(),
                ..NormalizedCore::default()
            },
            ..NormalizedOrganisation::default()
        }
    }

    fn org_types() -> Vec<String> {
        vec![
            taxonomy::THING.to_string(),
            taxonomy::CONCEPT.to_string(),
            taxonomy::ORGANISATION.to_string(),
        ]
    }

    #[test]
    fn minimal_organisation_has_identity_and_types_and_nothing_else() {
        let org = assemble(
            &minimal_record(),
            &ClassifiedRelations::default(),
            &LabelProjection::default(),
            &ExpandedTypes {
                organisation: org_types(),
                ..ExpandedTypes::default()
            },
        );
        assert_eq!(org.thing.id, format!("http://api.ft.com/things/{UUID}"));
        assert_eq!(org.thing.api_url, format!("http://api.ft.com/organisations/{UUID}"));
        assert_eq!(org.types, org_types());
        assert!(org.parent.is_none());
        assert!(org.subsidiaries.is_empty());
        assert!(org.financial_instrument.is_none());
        assert!(org.labels.is_empty());
    }

    #[test]
    fn relationships_are_projected_with_their_hierarchies() {
        let relations = ClassifiedRelations {
            parent: None,
            subsidiaries: vec![ConceptRef {
                uuid: SUB.to_string(),
                pref_label: "Acme France".to_string(),
                direct_type: taxonomy::ORGANISATION.to_string(),
                figi: String::new(),
            }],
            financial_instrument: Some(ConceptRef {
                uuid: UUID.to_string(),
                pref_label: "Acme Shares".to_string(),
                direct_type: taxonomy::FINANCIAL_INSTRUMENT.to_string(),
                figi: "BBG0".to_string(),
            }),
        };
        let fi_types = vec![
            taxonomy::THING.to_string(),
            taxonomy::CONCEPT.to_string(),
            taxonomy::FINANCIAL_INSTRUMENT.to_string(),
        ];
        let org = assemble(
            &minimal_record(),
            &relations,
            &LabelProjection::default(),
            &ExpandedTypes {
                organisation: org_types(),
                subsidiaries: vec![org_types()],
                financial_instrument: fi_types.clone(),
                ..ExpandedTypes::default()
            },
        );
        let sub = &org.subsidiaries[0];
        assert_eq!(sub.thing.api_url, format!("http://api.ft.com/organisations/{SUB}"));
        assert_eq!(sub.types, org_types());
        let fi = org.financial_instrument.unwrap();
        // instruments live under things, not organisations
        assert_eq!(fi.thing.api_url, format!("http://api.ft.com/things/{UUID}"));
        assert_eq!(fi.types, fi_types);
        assert_eq!(fi.figi, "BBG0");
    }
}
