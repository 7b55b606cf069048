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

use crate::envelope::Envelope;
use crate::multipart::Multipart;
use crate::Options;
use bytes::Bytes;
use ess_core::{Context, Error, Result};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Request};
use log::debug;

/// Client for an ESS service.
///
/// A client holds its options and transport for its whole lifetime and keeps no
/// per-call state, so one instance can be cloned and shared across tasks.
///
/// ```no_run
/// use ess_sdk::{Client, Context, Options};
///
/// # fn build(ctx: Context) -> ess_sdk::Result<Client> {
/// let opts = Options::new("app-key", "app-secret", "127.0.0.1:2020");
/// let client = Client::new(ctx, opts)?;
/// # Ok(client)
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    options: Options,
}

impl Client {
    /// Create a new client.
    ///
    /// Fails with [`ErrorKind::ConfigInvalid`](ess_core::ErrorKind::ConfigInvalid)
    /// naming the first empty option. No network I/O happens here.
    pub fn new(ctx: Context, options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self { ctx, options })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.options.endpoint(), path)
    }

    /// POST url-encoded form fields to `path`.
    pub(crate) async fn post_form(&self, path: &str, fields: &[(&str, String)]) -> Result<Envelope> {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();

        let req = Request::builder()
            .method(Method::POST)
            .uri(self.url(path))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(ACCEPT, "application/json")
            .body(Bytes::from(body))?;

        self.send(req).await
    }

    /// POST a multipart form to `path`.
    pub(crate) async fn post_multipart(&self, path: &str, form: Multipart) -> Result<Envelope> {
        let req = Request::builder()
            .method(Method::POST)
            .uri(self.url(path))
            .header(CONTENT_TYPE, form.content_type())
            .header(ACCEPT, "application/json")
            .body(form.into_body())?;

        self.send(req).await
    }

    async fn send(&self, req: Request<Bytes>) -> Result<Envelope> {
        let uri = req.uri().clone();
        debug!("sending {} request to {}", req.method(), uri);

        let resp = self.ctx.http_send(req).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::unexpected(format!(
                "{uri} returned status {status}: {}",
                String::from_utf8_lossy(resp.body())
            )));
        }

        let envelope = Envelope::from_slice(resp.body())?;
        debug!(
            "{uri} responded with code {} msg {:?}",
            envelope.code, envelope.msg
        );
        Ok(envelope)
    }
}
