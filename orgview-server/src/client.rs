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

//! Concepts API client.
//!
//! Implements the core provider seam over the upstream concepts service. The
//! underlying connection pool is the one process-wide shared resource; its
//! bounds come from configuration. No retries: a provider failure surfaces
//! immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

use orgview_core::{ConceptProvider, OrgError, Result};

use crate::config::UpstreamConfig;

pub struct ConceptsClient {
    http: HttpClient,
    base_url: String,
}

impl ConceptsClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let http = HttpClient::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Duration::from_secs(config.pool_idle_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn concept_url(&self, identifier: &str) -> String {
        format!("{}/concepts/{identifier}", self.base_url)
    }
}

#[async_trait]
impl ConceptProvider for ConceptsClient {
    async fn read(&self, identifier: &str) -> Result<Option<Value>> {
        let response = self
            .http
            .get(self.concept_url(identifier))
            .send()
            .await
            .map_err(|e| OrgError::UpstreamUnavailable(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<Value>()
                .await
                .map(Some)
                .map_err(|e| OrgError::MalformedPayload(e.to_string())),
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(OrgError::UpstreamUnavailable(format!(
                "concepts api answered {status} for identifier '{identifier}'"
            ))),
        }
    }

    async fn check_connectivity(&self) -> Result<()> {
        let response = self
            .http
            .get(format!("{}/__gtg", self.base_url))
            .send()
            .await
            .map_err(|e| OrgError::UpstreamUnavailable(e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(OrgError::UpstreamUnavailable(format!(
                "concepts api gtg answered {}",
                response.status()
            )))
        }
    }
}
