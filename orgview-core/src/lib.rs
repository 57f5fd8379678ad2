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

//! Orgview Core
//!
//! Projection pipeline turning a heterogeneous raw organisation record
//! (graph query result or concept-service payload) into the canonical public
//! view: schema normalization, canonical-identifier resolution, relationship
//! classification, type hierarchy expansion, label deduplication and final
//! assembly. HTTP wiring lives in `orgview-server`.

pub mod assembler;
pub mod error;
pub mod identifiers;
pub mod labels;
pub mod model;
pub mod normalizer;
pub mod pipeline;
pub mod raw;
pub mod relationship;
pub mod resolver;
pub mod taxonomy;

pub use assembler::{assemble, ExpandedTypes};
pub use error::{OrgError, Result};
pub use labels::{project_labels, LabelProjection, LabelSuffixes};
pub use model::{FinancialInstrument, Organisation, Parent, Subsidiary, Thing};
pub use normalizer::{normalize, ConceptRef, NormalizedCore, NormalizedOrganisation};
pub use pipeline::{ConceptProvider, Projection, Projector};
pub use raw::{ConceptPayload, RawConcept, RawRelatedConcept, TypedLabel};
pub use relationship::{classify, ClassifiedRelations, RelationKind};
pub use resolver::{resolve, Resolution};
pub use taxonomy::{OntologyExpander, TypeHierarchy};
