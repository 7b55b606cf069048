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

//! The `{code, msg, data}` envelope wrapped around every ESS response.

use ess_core::{Error, Result};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Generic response envelope.
///
/// Only `data` is inspected by the client; `code` and `msg` are kept for logging,
/// so a `null` or oddly typed value there never fails the decode.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Envelope {
    #[serde(deserialize_with = "lenient_code")]
    pub code: i64,
    #[serde(deserialize_with = "lenient_msg")]
    pub msg: String,
    pub data: Value,
}

fn lenient_code<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<i64, D::Error> {
    Ok(Value::deserialize(d)?.as_i64().unwrap_or_default())
}

fn lenient_msg<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => String::new(),
        Value::String(v) => v,
        v => v.to_string(),
    })
}

impl Envelope {
    pub(crate) fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| {
            Error::response_invalid(format!("response body is not a valid envelope: {e}"))
                .with_source(e)
        })
    }
}

/// Borrow `data` as a string keyed map.
pub(crate) fn data_map(data: &Value) -> Result<&Map<String, Value>> {
    data.as_object().ok_or_else(|| {
        Error::response_invalid(format!("response data invalid: expected map, got {data}"))
    })
}

/// Read a required string field out of `data`.
pub(crate) fn string_field<'a>(data: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    match data.get(key) {
        Some(Value::String(v)) => Ok(v),
        Some(v) => Err(Error::response_invalid(format!(
            "response data invalid: {key} is not a string: {v}"
        ))),
        None => Err(Error::response_invalid(format!(
            "response data invalid: missing {key}"
        ))),
    }
}
