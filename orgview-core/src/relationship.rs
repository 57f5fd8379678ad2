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

//! Relationship classification.
//!
//! Related concepts are partitioned into parent / subsidiaries / financial
//! instrument by predicate-URI suffix. The mapping is a closed enumeration
//! produced by one function; predicates outside the table classify as
//! [`RelationKind::Unknown`] and are dropped, which keeps new upstream
//! relation types from breaking the read path.

use crate::identifiers;
use crate::normalizer::{ConceptRef, NormalizedOrganisation};
use crate::raw::RawRelatedConcept;

/// Relation kind named by a predicate URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// The related concept is the parent organisation.
    Parent,
    /// The related concept is a subsidiary.
    Subsidiary,
    /// The related concept is the issued financial instrument.
    Issue,
    Unknown,
}

impl RelationKind {
    /// Classify a predicate URI by its suffix.
    pub fn from_predicate(predicate: &str) -> Self {
        let suffix = predicate.rsplit('/').next().unwrap_or(predicate);
        match suffix {
            "subOrganisationOf" | "hasParentOrganisation" => RelationKind::Parent,
            "parentOrganisationOf" | "isParentOrganisationOf" => RelationKind::Subsidiary,
            "issued" | "issuedTo" => RelationKind::Issue,
            _ => RelationKind::Unknown,
        }
    }
}

/// The classified relationship buckets. A concept lands in at most one.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedRelations {
    pub parent: Option<ConceptRef>,
    pub subsidiaries: Vec<ConceptRef>,
    pub financial_instrument: Option<ConceptRef>,
}

fn to_ref(related: &RawRelatedConcept) -> ConceptRef {
    let c = &related.concept;
    ConceptRef {
        uuid: identifiers::uuid_of(&c.id).unwrap_or(c.id.as_str()).to_string(),
        pref_label: c.pref_label.clone(),
        direct_type: c.direct_type.clone(),
        figi: c.figi.clone(),
    }
}

/// Deterministic subsidiary ordering: mention count descending, then
/// prefLabel ascending. Duplicate mentions of one concept collapse into one
/// entry carrying the count.
fn order_subsidiaries(mentions: Vec<ConceptRef>) -> Vec<ConceptRef> {
    let mut distinct: Vec<(ConceptRef, usize)> = Vec::new();
    for mention in mentions {
        match distinct.iter_mut().find(|(s, _)| s.uuid == mention.uuid) {
            Some((_, count)) => *count += 1,
            None => distinct.push((mention, 1)),
        }
    }
    distinct.sort_by(|(a, ca), (b, cb)| {
        cb.cmp(ca).then_with(|| a.pref_label.cmp(&b.pref_label))
    });
    distinct.into_iter().map(|(s, _)| s).collect()
}

/// Partition the record's related concepts, merging them with relationships
/// the raw schema had already resolved. At most one parent and at most one
/// financial instrument survive; the normalizer has already rejected
/// ambiguous rows.
pub fn classify(record: &NormalizedOrganisation) -> ClassifiedRelations {
    let mut parent = record.parent.clone();
    let mut subsidiaries = record.subsidiaries.clone();
    let mut instruments = record.financial_instruments.clone();

    for related in &record.related_concepts {
        match RelationKind::from_predicate(&related.predicate) {
            RelationKind::Parent => {
                if parent.is_none() {
                    parent = Some(to_ref(related));
                }
            }
            RelationKind::Subsidiary => subsidiaries.push(to_ref(related)),
            RelationKind::Issue => instruments.push(to_ref(related)),
            RelationKind::Unknown => {
                tracing::debug!(predicate = %related.predicate, "dropping unclassified predicate");
            }
        }
    }

    ClassifiedRelations {
        parent,
        subsidiaries: order_subsidiaries(subsidiaries),
        financial_instrument: if instruments.is_empty() {
            None
        } else {
            Some(instruments.remove(0))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawConcept;

    fn related(uuid: &str, label: &str, predicate_suffix: &str) -> RawRelatedConcept {
        RawRelatedConcept {
            concept: RawConcept {
                id: format!("http://api.ft.com/things/{uuid}"),
                pref_label: label.to_string(),
                ..RawConcept::default()
            },
            predicate: format!("http://www.ft.com/ontology/{predicate_suffix}"),
        }
    }

    fn record_with(related_concepts: Vec<RawRelatedConcept>) -> NormalizedOrganisation {
        NormalizedOrganisation {
            related_concepts,
            ..NormalizedOrganisation::default()
        }
    }

    // uuids are shape-checked elsewhere; here any string will do
    const P: &str = "00000000-0000-0000-0000-00000000000a";
    const S1: &str = "00000000-0000-0000-0000-00000000000b";
    const S2: &str = "00000000-0000-0000-0000-00000000000c";
    const F: &str = "00000000-0000-0000-0000-00000000000d";

    #[test]
    fn predicate_suffixes_map_to_their_kinds() {
        for (suffix, kind) in [
            ("subOrganisationOf", RelationKind::Parent),
            ("hasParentOrganisation", RelationKind::Parent),
            ("parentOrganisationOf", RelationKind::Subsidiary),
            ("isParentOrganisationOf", RelationKind::Subsidiary),
            ("issued", RelationKind::Issue),
            ("issuedTo", RelationKind::Issue),
        ] {
            let predicate = format!("http://www.ft.com/ontology/{suffix}");
            assert_eq!(RelationKind::from_predicate(&predicate), kind, "{suffix}");
        }
        assert_eq!(
            RelationKind::from_predicate("http://www.ft.com/ontology/mentions"),
            RelationKind::Unknown
        );
    }

    #[test]
    fn partitions_each_concept_into_one_bucket() {
        let classified = classify(&record_with(vec![
            related(F, "Acme Shares", "issued"),
            related(P, "Parent Co", "subOrganisationOf"),
            related(S1, "Sub Co", "parentOrganisationOf"),
        ]));
        assert_eq!(classified.parent.unwrap().uuid, P);
        assert_eq!(classified.subsidiaries.len(), 1);
        assert_eq!(classified.subsidiaries[0].uuid, S1);
        assert_eq!(classified.financial_instrument.unwrap().uuid, F);
    }

    #[test]
    fn unknown_predicates_are_dropped_silently() {
        let classified = classify(&record_with(vec![related(S1, "X", "mentions")]));
        assert!(classified.parent.is_none());
        assert!(classified.subsidiaries.is_empty());
        assert!(classified.financial_instrument.is_none());
    }

    #[test]
    fn at_most_one_parent_is_accepted() {
        let classified = classify(&record_with(vec![
            related(P, "First", "subOrganisationOf"),
            related(S1, "Second", "hasParentOrganisation"),
        ]));
        assert_eq!(classified.parent.unwrap().uuid, P);
    }

    #[test]
    fn subsidiaries_order_by_mentions_then_label() {
        let classified = classify(&record_with(vec![
            related(S1, "Zeta Sub", "parentOrganisationOf"),
            related(S2, "Alpha Sub", "parentOrganisationOf"),
            related(S1, "Zeta Sub", "parentOrganisationOf"),
        ]));
        let uuids: Vec<&str> = classified.subsidiaries.iter().map(|s| s.uuid.as_str()).collect();
        // S1 mentioned twice, so it leads despite the later label
        assert_eq!(uuids, vec![S1, S2]);

        let tied = classify(&record_with(vec![
            related(S1, "Zeta Sub", "parentOrganisationOf"),
            related(S2, "Alpha Sub", "parentOrganisationOf"),
        ]));
        let labels: Vec<&str> = tied.subsidiaries.iter().map(|s| s.pref_label.as_str()).collect();
        assert_eq!(labels, vec!["Alpha Sub", "Zeta Sub"]);
    }

    #[test]
    fn first_issued_instrument_fills_the_single_slot() {
        let classified = classify(&record_with(vec![
            related(F, "Primary listing", "issued"),
            related(S1, "Secondary listing", "issuedTo"),
        ]));
        assert_eq!(classified.financial_instrument.unwrap().uuid, F);
    }

    #[test]
    fn graph_resolved_relations_pass_through() {
        let mut record = record_with(vec![related(S1, "From predicate", "parentOrganisationOf")]);
        record.parent = Some(ConceptRef {
            uuid: P.to_string(),
            pref_label: "Direct parent".to_string(),
            ..ConceptRef::default()
        });
        record.subsidiaries = vec![ConceptRef {
            uuid: S2.to_string(),
            pref_label: "Direct sub".to_string(),
            ..ConceptRef::default()
        }];
        let classified = classify(&record);
        assert_eq!(classified.parent.unwrap().uuid, P);
        assert_eq!(classified.subsidiaries.len(), 2);
    }
}
