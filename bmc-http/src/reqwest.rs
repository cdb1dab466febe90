// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::HttpClient;
use http::header;
use http::StatusCode;
use idrac_raid_core::ActionResponse;
use idrac_raid_core::BmcCredentials;
use idrac_raid_core::ResponseError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;
use url::Url;

#[derive(Debug)]
pub enum BmcError {
    ReqwestError(reqwest::Error),
    JsonError(serde_path_to_error::Error<serde_json::Error>),
    InvalidResponse {
        status: StatusCode,
        body: Option<JsonValue>,
    },
}

impl From<reqwest::Error> for BmcError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(value)
    }
}

impl ResponseError for BmcError {
    fn status(&self) -> Option<StatusCode> {
        match self {
            Self::InvalidResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    fn body(&self) -> Option<&JsonValue> {
        match self {
            Self::InvalidResponse { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::fmt::Display for BmcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReqwestError(e) => write!(f, "HTTP client error: {e:?}"),
            Self::InvalidResponse { status, .. } => {
                write!(f, "Invalid HTTP response: {status}")
            }
            Self::JsonError(e) => write!(
                f,
                "JSON deserialization error at line {} column {} path {}: {e}",
                e.inner().line(),
                e.inner().column(),
                e.path(),
            ),
        }
    }
}

#[allow(clippy::absolute_paths)]
impl std::error::Error for BmcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReqwestError(e) => Some(e),
            Self::JsonError(e) => Some(e.inner()),
            Self::InvalidResponse { .. } => None,
        }
    }
}

/// Configuration parameters for the reqwest HTTP client.
///
/// This struct allows customizing various aspects of the reqwest client behavior,
/// including timeouts and TLS settings.
///
/// # Examples
///
/// ```rust
/// use idrac_raid_bmc_http::reqwest::ClientParams;
/// use std::time::Duration;
///
/// let params = ClientParams::new()
///     .timeout(Duration::from_secs(30))
///     .connect_timeout(Duration::from_secs(10))
///     .user_agent("MyApp/1.0")
///     .accept_invalid_certs(true);
/// ```
#[derive(Debug, Clone)]
pub struct ClientParams {
    /// HTTP request timeout
    pub timeout: Option<Duration>,
    /// TCP connection timeout
    pub connect_timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: Option<String>,
    /// Whether to accept invalid TLS certificates
    pub accept_invalid_certs: bool,
}

impl Default for ClientParams {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(120)),
            connect_timeout: Some(Duration::from_secs(5)),
            user_agent: Some("idrac-raid/v1".to_string()),
            accept_invalid_certs: false,
        }
    }
}

impl ClientParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

/// HTTP client implementation using the reqwest library.
///
/// # Examples
///
/// ```rust,no_run
/// use idrac_raid_bmc_http::HttpBmc;
/// use idrac_raid_bmc_http::reqwest::Client;
/// use idrac_raid_bmc_http::reqwest::ClientParams;
/// use idrac_raid_core::BmcCredentials;
/// use std::time::Duration;
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // iDRACs ship with self-signed certificates.
/// let params = ClientParams::new()
///     .timeout(Duration::from_secs(60))
///     .accept_invalid_certs(true);
/// let client = Client::with_params(params)?;
///
/// let credentials = BmcCredentials::new("root".to_string(), "calvin".to_string());
/// let endpoint = Url::parse("https://192.168.0.120")?;
/// let bmc = HttpBmc::new(client, endpoint, credentials);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

#[allow(clippy::missing_errors_doc)]
#[allow(clippy::absolute_paths)]
impl Client {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_params(ClientParams::default())
    }

    pub fn with_params(params: ClientParams) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(connect_timeout) = params.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        if let Some(user_agent) = params.user_agent {
            builder = builder.user_agent(user_agent);
        }

        if params.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Client {
    /// Decode `response`. Statuses rejected by `accepted` become
    /// [`BmcError::InvalidResponse`].
    async fn handle_response<T>(
        &self,
        response: reqwest::Response,
        accepted: fn(StatusCode) -> bool,
    ) -> Result<ActionResponse<T>, BmcError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let bytes = response.bytes().await.map_err(BmcError::ReqwestError)?;

        if !accepted(status) {
            // Error bodies are informational only; a non-JSON body is dropped.
            let body = serde_json::from_slice(&bytes).ok();
            return Err(BmcError::InvalidResponse { status, body });
        }

        let data = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_path_to_error::deserialize(JsonValue::Null)
        } else {
            serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_slice(&bytes))
        }
        .map_err(BmcError::JsonError)?;

        Ok(ActionResponse {
            status,
            location,
            data,
        })
    }
}

impl HttpClient for Client {
    type Error = BmcError;

    async fn get<T>(
        &self,
        url: Url,
        credentials: &BmcCredentials,
    ) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .basic_auth(&credentials.username, Some(credentials.password()))
            .send()
            .await?;

        self.handle_response(response, |status| status == StatusCode::OK)
            .await
            .map(|r| r.data)
    }

    async fn post<B, T>(
        &self,
        url: Url,
        body: &B,
        credentials: &BmcCredentials,
    ) -> Result<ActionResponse<T>, Self::Error>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send + Sync,
    {
        let response = self
            .client
            .post(url)
            .basic_auth(&credentials.username, Some(credentials.password()))
            .json(body)
            .send()
            .await?;

        self.handle_response(response, |status| status.is_success())
            .await
    }
}
