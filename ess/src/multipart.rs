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

//! Minimal `multipart/form-data` encoder for document uploads.

use bytes::{BufMut, Bytes, BytesMut};

/// A multipart form made of text fields followed by at most one file part.
#[derive(Debug)]
pub(crate) struct Multipart {
    boundary: String,
    fields: Vec<(String, String)>,
    file: Option<FilePart>,
}

#[derive(Debug)]
struct FilePart {
    name: String,
    file_name: String,
    content: Vec<u8>,
}

impl Multipart {
    /// Create an empty form with a random boundary.
    pub(crate) fn new() -> Self {
        let boundary = format!(
            "{:016x}-{:016x}-{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>(),
            rand::random::<u64>()
        );
        Self::with_boundary(boundary)
    }

    pub(crate) fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            fields: Vec::new(),
            file: None,
        }
    }

    /// Append a text field.
    pub(crate) fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Set the file part; it is always written after the text fields.
    pub(crate) fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        self.file = Some(FilePart {
            name: name.into(),
            file_name: file_name.into(),
            content,
        });
        self
    }

    /// Value for the `Content-Type` header.
    pub(crate) fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Encode the form into a request body.
    pub(crate) fn into_body(self) -> Bytes {
        let mut buf = BytesMut::new();

        for (name, value) in &self.fields {
            buf.put_slice(format!("--{}\r\n", self.boundary).as_bytes());
            buf.put_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
                    escape_quotes(name)
                )
                .as_bytes(),
            );
            buf.put_slice(value.as_bytes());
            buf.put_slice(b"\r\n");
        }

        if let Some(file) = &self.file {
            buf.put_slice(format!("--{}\r\n", self.boundary).as_bytes());
            buf.put_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    escape_quotes(&file.name),
                    escape_quotes(&file.file_name)
                )
                .as_bytes(),
            );
            buf.put_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            buf.put_slice(&file.content);
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        buf.freeze()
    }
}

// Names are sent as raw UTF-8 inside quotes. `\` and `"` are escaped, CR and LF
// are percent-encoded so a name can never start a new header line.
fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
