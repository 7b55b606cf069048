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

//! Client SDK for the ESS electronic seal service.
//!
//! ESS keeps documents and seals on the server side. This crate covers the
//! integrator's half of the workflow:
//!
//! - register a document by uploading its content with [`Client::create_document`]
//! - seal it at a keyword with [`Client::sign_document_for_keyword`]
//! - or at an explicit position with [`Client::sign_document_for_position`]
//!
//! Every call is a single POST; the transport behind it is whatever
//! [`HttpSend`] the [`Context`] carries.
//!
//! ## Example
//!
//! ```no_run
//! use ess_sdk::{DocType, Document, KeywordSignInfo, Options};
//!
//! # #[tokio::main]
//! # async fn main() -> ess_sdk::Result<()> {
//! let opts = Options::new("app-key", "app-secret", "127.0.0.1:2020");
//! let client = ess_sdk::default_client(opts)?;
//!
//! let mut doc = Document {
//!     doc_name: "contract".to_string(),
//!     doc_type: DocType::Pdf,
//!     doc_content_base64: "JVBERi0xLjQK".to_string(),
//!     user_id: "user-id".to_string(),
//!     uuid: String::new(),
//! };
//! client.create_document(&mut doc).await?;
//!
//! let url = client
//!     .sign_document_for_keyword(&KeywordSignInfo {
//!         doc_id: doc.uuid.clone(),
//!         seal_id: "seal-id".to_string(),
//!         keyword: "Signature".to_string(),
//!         zoom: 100,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("signed document: {url}");
//! # Ok(())
//! # }
//! ```

pub use ess_core::{Context, Env, Error, ErrorKind, HttpSend, OsEnv, Result, StaticEnv};

mod constants;

mod config;
pub use config::Options;

mod client;
pub use client::Client;

mod document;
pub use document::{DocType, Document};

mod sign;
pub use sign::{KeywordSignInfo, PositionSignInfo};

mod envelope;
mod multipart;

/// Create a context backed by a default reqwest client and the OS environment.
#[cfg(feature = "default-context")]
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ess_http_send_reqwest::ReqwestHttpSend::default())
        .with_env(OsEnv)
}

/// Create a client over [`default_context`].
///
/// Fails only when `options` is incomplete.
#[cfg(feature = "default-context")]
pub fn default_client(options: Options) -> Result<Client> {
    Client::new(default_context(), options)
}
