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

use crate::Credential;
use async_trait::async_trait;
use bgsign_core::utils::Redact;
use bgsign_core::{Context, ProvideCredential, Result};
use std::fmt::{Debug, Formatter};

/// StaticCredentialProvider provides static cloudinary credentials.
///
/// This provider is used when you have the connection string or the api key
/// and secret directly and want to use them without any dynamic loading.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    source: Source,
}

#[derive(Clone)]
enum Source {
    Parts(Credential),
    ConnectionString(String),
}

impl Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.source {
            Source::Parts(cred) => f
                .debug_struct("StaticCredentialProvider")
                .field("credential", cred)
                .finish(),
            Source::ConnectionString(v) => f
                .debug_struct("StaticCredentialProvider")
                .field("connection_string", &Redact::from(v))
                .finish(),
        }
    }
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with api key, api secret and cloud name.
    pub fn new(api_key: &str, api_secret: &str, cloud_name: &str) -> Self {
        Self {
            source: Source::Parts(Credential::new(api_key, api_secret, cloud_name)),
        }
    }

    /// Create a new StaticCredentialProvider from a connection string.
    ///
    /// The string is parsed every time a credential is provided.
    pub fn from_connection_string(conn_str: &str) -> Self {
        Self {
            source: Source::ConnectionString(conn_str.to_string()),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        match &self.source {
            Source::Parts(cred) => Ok(Some(cred.clone())),
            Source::ConnectionString(v) => Credential::from_connection_string(v).map(Some),
        }
    }
}
