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

//! The projection pipeline.
//!
//! Provider -> normalizer -> resolver -> {classifier, expander, label
//! deduplicator} -> assembler. The pipeline is a pure function of its inputs
//! plus the injected provider and taxonomy capabilities; it holds no mutable
//! state and performs no retries. Assembly is all-or-nothing: a partial view
//! is never returned.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::assembler::{assemble, ExpandedTypes};
use crate::error::{OrgError, Result};
use crate::identifiers;
use crate::labels::project_labels;
use crate::model::Organisation;
use crate::normalizer::{normalize, NormalizedOrganisation};
use crate::relationship::{classify, ClassifiedRelations};
use crate::resolver::{resolve, Resolution};
use crate::taxonomy::TypeHierarchy;

/// Read capability of the graph/concept backend.
#[async_trait]
pub trait ConceptProvider: Send + Sync {
    /// Fetch the raw record for an identifier. `Ok(None)` means not found.
    async fn read(&self, identifier: &str) -> Result<Option<Value>>;

    /// Health probe; not part of the projection path.
    async fn check_connectivity(&self) -> Result<()>;
}

/// Terminal pipeline outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// The assembled public view.
    Organisation(Box<Organisation>),
    /// The caller should be pointed at the canonical path; no body.
    Redirect { location: String },
}

/// Orchestrates one projection per request. Collaborators are injected at
/// construction; there are no process-wide globals.
pub struct Projector {
    provider: Arc<dyn ConceptProvider>,
    taxonomy: Arc<dyn TypeHierarchy>,
}

impl Projector {
    pub fn new(provider: Arc<dyn ConceptProvider>, taxonomy: Arc<dyn TypeHierarchy>) -> Self {
        Self { provider, taxonomy }
    }

    /// Project the organisation behind `identifier`, or signal a redirect to
    /// its canonical path. `request_path` is the inbound path whose alias
    /// segment a redirect must replace.
    pub async fn project(&self, identifier: &str, request_path: &str) -> Result<Projection> {
        if !identifiers::is_valid_uuid(identifier) {
            return Err(OrgError::InvalidInput(identifier.to_string()));
        }

        let raw = self
            .provider
            .read(identifier)
            .await?
            .ok_or(OrgError::NotFound)?;
        let record = normalize(identifier, &raw)?.ok_or(OrgError::NotFound)?;

        if let Resolution::Redirect { canonical_path } =
            resolve(identifier, &record.core.id, request_path)?
        {
            tracing::info!(identifier, canonical_path, "alias identifier, redirecting");
            return Ok(Projection::Redirect {
                location: canonical_path,
            });
        }

        let relations = classify(&record);
        let labels = project_labels(&record.core.typed_labels, &record.label_suffixes);
        let expanded = self.expand_all(&record, &relations)?;

        Ok(Projection::Organisation(Box::new(assemble(
            &record, &relations, &labels, &expanded,
        ))))
    }

    /// Pass-through to the provider's health probe.
    pub async fn check_connectivity(&self) -> Result<()> {
        self.provider.check_connectivity().await
    }

    /// Expand the hierarchy of every entity reference that will appear in
    /// the output. Any single failure aborts the projection.
    fn expand_all(
        &self,
        record: &NormalizedOrganisation,
        relations: &ClassifiedRelations,
    ) -> Result<ExpandedTypes> {
        let organisation = self.taxonomy.expand(&record.core.direct_type)?;
        let parent = match &relations.parent {
            Some(p) => self.taxonomy.expand(&p.direct_type)?,
            None => Vec::new(),
        };
        let subsidiaries = relations
            .subsidiaries
            .iter()
            .map(|s| self.taxonomy.expand(&s.direct_type))
            .collect::<Result<Vec<_>>>()?;
        let financial_instrument = match &relations.financial_instrument {
            Some(fi) => self.taxonomy.expand(&fi.direct_type)?,
            None => Vec::new(),
        };
        Ok(ExpandedTypes {
            organisation,
            parent,
            subsidiaries,
            financial_instrument,
        })
    }
}
