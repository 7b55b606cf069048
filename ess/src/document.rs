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
use crate::multipart::Multipart;
use crate::Client;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use ess_core::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Format of a document registered with ESS.
///
/// The service identifies formats by integer code. Codes this client does not
/// know are kept as [`DocType::Other`] and passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum DocType {
    /// Portable Document Format, code `2`.
    Pdf,
    /// Open Fixed-layout Document, code `3`.
    Ofd,
    /// Any other code.
    Other(i64),
}

impl DocType {
    /// Integer code sent to the service.
    pub fn code(self) -> i64 {
        match self {
            DocType::Pdf => 2,
            DocType::Ofd => 3,
            DocType::Other(code) => code,
        }
    }

    /// File extension used when uploading, if the format has one.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            DocType::Pdf => Some("pdf"),
            DocType::Ofd => Some("ofd"),
            DocType::Other(_) => None,
        }
    }
}

impl From<i64> for DocType {
    fn from(code: i64) -> Self {
        match code {
            2 => DocType::Pdf,
            3 => DocType::Ofd,
            code => DocType::Other(code),
        }
    }
}

impl From<DocType> for i64 {
    fn from(t: DocType) -> Self {
        t.code()
    }
}

/// A document to register with ESS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Display name, without extension.
    pub doc_name: String,
    /// Document format.
    pub doc_type: DocType,
    /// Standard base64 encoding of the file content.
    pub doc_content_base64: String,
    /// Owner of the document on the ESS side.
    pub user_id: String,
    /// Identifier assigned by ESS. Empty until [`Client::create_document`] succeeds.
    #[serde(default)]
    pub uuid: String,
}

impl Document {
    /// File name announced in the upload: `doc_name` plus the extension of `doc_type`.
    pub fn file_name(&self) -> String {
        match self.doc_type.extension() {
            Some(ext) => format!("{}.{}", self.doc_name, ext),
            None => self.doc_name.clone(),
        }
    }

    /// Decode `doc_content_base64`.
    ///
    /// Line breaks are ignored so wrapped base64 is accepted; anything else that is
    /// not standard padded base64 is rejected as a whole.
    pub fn decode_content(&self) -> Result<Vec<u8>> {
        let input: Vec<u8> = self
            .doc_content_base64
            .bytes()
            .filter(|b| *b != b'\r' && *b != b'\n')
            .collect();

        BASE64_STANDARD.decode(input).map_err(|e| {
            Error::content_invalid(format!("invalid document content: {e}")).with_source(e)
        })
    }
}

/// Payload of a successful registration.
#[derive(Debug)]
struct CreatedDocument {
    id: String,
}

impl CreatedDocument {
    fn from_data(data: &Value) -> Result<Self> {
        let data = data_map(data)?;
        let id = string_field(data, "id")?;
        if id.is_empty() {
            return Err(Error::response_invalid("response data invalid: id is empty"));
        }

        Ok(Self { id: id.to_string() })
    }
}

impl Client {
    /// Register a document with ESS.
    ///
    /// The decoded content is uploaded as a multipart file together with the
    /// descriptive fields. On success the assigned identifier is written to
    /// `doc.uuid`; on any failure `doc` is left untouched.
    pub async fn create_document(&self, doc: &mut Document) -> Result<()> {
        let content = doc.decode_content()?;
        let file_name = doc.file_name();
        debug!(
            "creating document {:?} ({} bytes) for user {}",
            file_name,
            content.len(),
            doc.user_id
        );

        let form = Multipart::new()
            .text("docName", doc.doc_name.as_str())
            .text("docType", doc.doc_type.code().to_string())
            .text("userId", doc.user_id.as_str())
            .text("uuid", doc.uuid.as_str())
            .file(DOC_FILE_FIELD, file_name, content);

        let envelope = self.post_multipart(DOC_CREATE_PATH, form).await?;
        let created = CreatedDocument::from_data(&envelope.data).inspect_err(|err| {
            debug!("document creation rejected: {err}");
        })?;

        doc.uuid = created.id;
        Ok(())
    }
}
