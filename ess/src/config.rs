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
use ess_core::utils::Redact;
use ess_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Options for connecting to an ESS service.
///
/// `app_key` and `app_secret` identify the integrating party. They are carried with
/// the client but the service does not currently require requests to be signed, so
/// no authentication header is derived from them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Integrator code issued by the ESS operator.
    pub app_key: String,
    /// Integrator secret issued by the ESS operator.
    pub app_secret: String,
    /// Service address as `host:port`. A leading `http://` or `https://` is honoured.
    pub addr: String,
}

impl Debug for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("app_key", &Redact::from(&self.app_key))
            .field("app_secret", &Redact::from(&self.app_secret))
            .field("addr", &self.addr)
            .finish()
    }
}

impl Options {
    /// Create options from the three required values.
    pub fn new(
        app_key: impl Into<String>,
        app_secret: impl Into<String>,
        addr: impl Into<String>,
    ) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
            addr: addr.into(),
        }
    }

    /// Load options from `ESS_APP_KEY`, `ESS_APP_SECRET` and `ESS_ADDR`.
    ///
    /// Unset variables are left empty and reported by [`Options::validate`].
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            app_key: ctx.env_var(ESS_APP_KEY).unwrap_or_default(),
            app_secret: ctx.env_var(ESS_APP_SECRET).unwrap_or_default(),
            addr: ctx.env_var(ESS_ADDR).unwrap_or_default(),
        }
    }

    /// Check that every required value is present.
    ///
    /// The first empty field is named in the returned error.
    pub fn validate(&self) -> Result<()> {
        if self.app_key.is_empty() {
            return Err(Error::config_invalid("app_key is empty"));
        }
        if self.app_secret.is_empty() {
            return Err(Error::config_invalid("app_secret is empty"));
        }
        if self.addr.is_empty() {
            return Err(Error::config_invalid("addr is empty"));
        }
        Ok(())
    }

    /// Base URL every endpoint path is appended to.
    pub(crate) fn endpoint(&self) -> String {
        let addr = self.addr.trim_end_matches('/');
        if addr.starts_with("http://") || addr.starts_with("https://") {
            addr.to_string()
        } else {
            format!("http://{addr}")
        }
    }
}
