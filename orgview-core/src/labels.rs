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

//! Label extraction and deduplication.
//!
//! One pass over the typed-label list produces two projections at once: the
//! named scalar fields (proper name, short name, hidden label, former names)
//! and the deduplicated display list. Every value seen lands in the display
//! list exactly once at its first-seen position, whether or not its type
//! matched a named field.

use std::collections::HashSet;

use crate::raw::TypedLabel;

/// Case-sensitive type-URI suffix sets for the named fields.
///
/// Historical payloads disagree on suffix capitalization across schema
/// versions, so the set is configured per variant instead of hard-coding one
/// casing.
#[derive(Debug, Clone, Copy)]
pub struct LabelSuffixes {
    pub proper_name: &'static [&'static str],
    pub short_name: &'static [&'static str],
    pub hidden_label: &'static [&'static str],
    pub former_name: &'static [&'static str],
}

impl LabelSuffixes {
    /// Suffix set for the concept-service schema, which has produced both
    /// casings over time.
    pub fn concept_schema() -> Self {
        Self {
            proper_name: &["properName", "ProperName"],
            short_name: &["shortName", "ShortName"],
            hidden_label: &["hiddenLabel", "HiddenLabel"],
            former_name: &["formerName", "FormerName"],
        }
    }

    /// Suffix set for the graph row schemas.
    pub fn graph_schema() -> Self {
        Self {
            proper_name: &["properName"],
            short_name: &["shortName"],
            hidden_label: &["hiddenLabel"],
            former_name: &["formerName"],
        }
    }
}

impl Default for LabelSuffixes {
    fn default() -> Self {
        Self::concept_schema()
    }
}

fn matches_any(label_type: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| label_type.ends_with(s))
}

/// The two projections of one pass over the typed-label list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelProjection {
    pub proper_name: String,
    pub short_name: String,
    pub hidden_label: String,
    pub former_names: Vec<String>,
    /// Each distinct value exactly once, first-seen order.
    pub display: Vec<String>,
}

/// Project the typed-label list into named fields and the display list.
///
/// First occurrence wins for proper/short/hidden; former names keep every
/// occurrence in encounter order. Unrecognized types contribute to the
/// display list only.
pub fn project_labels(labels: &[TypedLabel], suffixes: &LabelSuffixes) -> LabelProjection {
    let mut out = LabelProjection::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for label in labels {
        if label.value.is_empty() {
            continue;
        }
        if matches_any(&label.label_type, suffixes.proper_name) {
            if out.proper_name.is_empty() {
                out.proper_name = label.value.clone();
            }
        } else if matches_any(&label.label_type, suffixes.short_name) {
            if out.short_name.is_empty() {
                out.short_name = label.value.clone();
            }
        } else if matches_any(&label.label_type, suffixes.hidden_label) {
            if out.hidden_label.is_empty() {
                out.hidden_label = label.value.clone();
            }
        } else if matches_any(&label.label_type, suffixes.former_name) {
            out.former_names.push(label.value.clone());
        }

        if seen.insert(label.value.as_str()) {
            out.display.push(label.value.clone());
        }
    }

    out
}
