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

// Env values used by ESS clients.
pub const ESS_APP_KEY: &str = "ESS_APP_KEY";
pub const ESS_APP_SECRET: &str = "ESS_APP_SECRET";
pub const ESS_ADDR: &str = "ESS_ADDR";

// Endpoints exposed by the ESS service.
pub const DOC_CREATE_PATH: &str = "/ess/api/user/doc/create";
pub const DOC_SIGN_KEYWORD_PATH: &str = "/ess/api/user/doc/sign/keyword";
pub const DOC_SIGN_POSITION_PATH: &str = "/ess/api/user/doc/sign/position";

// Multipart field carrying the document bytes.
pub const DOC_FILE_FIELD: &str = "file";
