// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::envelope::{data_map, string_field};
use crate::Client;
use ess_core::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seal a document where a keyword occurs.
///
/// ESS searches `keyword` within `[start, end)` under `scope` and places seal
/// `seal_id` there at `zoom` percent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSignInfo {
    /// Document identifier returned by [`Client::create_document`].
    pub doc_id: String,
    /// Seal to apply.
    pub seal_id: String,
    /// Text to search for.
    pub keyword: String,
    /// Search scope as understood by the service.
    pub scope: i64,
    /// Start of the search range.
    pub start: i64,
    /// End of the search range.
    pub end: i64,
    /// Seal zoom in percent.
    pub zoom: i64,
}

impl KeywordSignInfo {
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("docId", self.doc_id.clone()),
            ("sealId", self.seal_id.clone()),
            ("keyword", self.keyword.clone()),
            ("scope", self.scope.to_string()),
            ("start", self.start.to_string()),
            ("end", self.end.to_string()),
            ("zoom", self.zoom.to_string()),
        ]
    }
}

/// Seal a document at an explicit page position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSignInfo {
    /// Document identifier returned by [`Client::create_document`].
    pub doc_id: String,
    /// Seal to apply.
    pub seal_id: String,
    /// Page to place the seal on.
    pub page_number: String,
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
    /// Seal zoom in percent.
    pub zoom: i64,
    /// Reason recorded with the placement.
    pub reason: String,
    /// Remark recorded with the signing.
    pub remark: String,
}

impl PositionSignInfo {
    // The service takes a list of placements; only the first slot is used.
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("docId", self.doc_id.clone()),
            ("remark", self.remark.clone()),
            ("signs[0].pageNumber", self.page_number.clone()),
            ("signs[0].sealId", self.seal_id.clone()),
            ("signs[0].x", self.x.to_string()),
            ("signs[0].y", self.y.to_string()),
            ("signs[0].zoom", self.zoom.to_string()),
            ("signs[0].reason", self.reason.clone()),
        ]
    }
}

/// Payload of a successful signing.
#[derive(Debug)]
struct SignedDocument {
    url: String,
}

impl SignedDocument {
    /// Extract the signed document, checking it describes `doc_id`.
    fn from_data(data: &Value, doc_id: &str) -> Result<Self> {
        let data = data_map(data)?;

        let id = string_field(data, "id")?;
        if id != doc_id {
            return Err(Error::response_invalid(format!(
                "response data invalid: id mismatch, expected {doc_id}, got {id}"
            )));
        }

        let url = string_field(data, "url")?;
        Ok(Self {
            url: url.to_string(),
        })
    }
}

impl Client {
    /// Seal a registered document at the occurrence of a keyword.
    ///
    /// Returns the URL of the signed document.
    pub async fn sign_document_for_keyword(&self, info: &KeywordSignInfo) -> Result<String> {
        debug!(
            "signing document {} with seal {} at keyword {:?}",
            info.doc_id, info.seal_id, info.keyword
        );

        let envelope = self
            .post_form(DOC_SIGN_KEYWORD_PATH, &info.form_fields())
            .await?;
        let signed = SignedDocument::from_data(&envelope.data, &info.doc_id).inspect_err(|err| {
            debug!("keyword signing of {} rejected: {err}", info.doc_id);
        })?;

        Ok(signed.url)
    }

    /// Seal a registered document at an explicit page position.
    ///
    /// Returns the URL of the signed document.
    pub async fn sign_document_for_position(&self, info: &PositionSignInfo) -> Result<String> {
        debug!(
            "signing document {} with seal {} on page {} at ({}, {})",
            info.doc_id, info.seal_id, info.page_number, info.x, info.y
        );

        let envelope = self
            .post_form(DOC_SIGN_POSITION_PATH, &info.form_fields())
            .await?;
        let signed = SignedDocument::from_data(&envelope.data, &info.doc_id).inspect_err(|err| {
            debug!("position signing of {} rejected: {err}", info.doc_id);
        })?;

        Ok(signed.url)
    }
}
