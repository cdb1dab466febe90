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

#[cfg(feature = "reqwest")]
pub mod reqwest;

use idrac_raid_core::Action;
use idrac_raid_core::ActionResponse;
use idrac_raid_core::Bmc;
use idrac_raid_core::BmcCredentials;
use idrac_raid_core::ODataId;
use idrac_raid_core::ResponseError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error as StdError;
use std::future::Future;
use std::sync::Arc;
use url::Url;

pub trait HttpClient: Send + Sync {
    type Error: Send + StdError;

    /// Perform an HTTP GET request. Any status other than `200 OK` is
    /// an error.
    fn get<T>(
        &self,
        url: Url,
        credentials: &BmcCredentials,
    ) -> impl Future<Output = Result<T, Self::Error>> + Send
    where
        T: DeserializeOwned + Send + Sync;

    /// Perform an HTTP POST request.
    ///
    /// Returns the status and `Location` header along with the decoded body.
    fn post<B, T>(
        &self,
        url: Url,
        body: &B,
        credentials: &BmcCredentials,
    ) -> impl Future<Output = Result<ActionResponse<T>, Self::Error>> + Send
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned + Send + Sync;
}

/// HTTP-based BMC implementation that wraps an [`HttpClient`].
///
/// This struct combines an HTTP client with BMC endpoint information and credentials
/// to provide a complete Redfish client implementation. It implements the [`Bmc`] trait
/// to provide standardized access to Redfish services.
///
/// # Type Parameters
///
/// * `C` - The HTTP client implementation to use
///
/// # Examples
///
/// ```rust,no_run
/// use idrac_raid_bmc_http::HttpBmc;
/// use idrac_raid_bmc_http::reqwest::Client;
/// use idrac_raid_core::BmcCredentials;
/// use url::Url;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = BmcCredentials::new("root".to_string(), "calvin".to_string());
/// let http_client = Client::new()?;
/// let endpoint = Url::parse("https://192.168.0.120")?;
///
/// let bmc = HttpBmc::new(http_client, endpoint, credentials);
/// # Ok(())
/// # }
/// ```
pub struct HttpBmc<C: HttpClient> {
    client: C,
    redfish_endpoint: RedfishEndpoint,
    credentials: BmcCredentials,
}

impl<C: HttpClient> HttpBmc<C> {
    /// Create a new HTTP-based BMC client.
    ///
    /// # Arguments
    ///
    /// * `client` - The HTTP client implementation to use for requests
    /// * `redfish_endpoint` - The base URL of the Redfish service (e.g., `https://192.168.0.120`)
    /// * `credentials` - Authentication credentials for the BMC
    pub fn new(client: C, redfish_endpoint: Url, credentials: BmcCredentials) -> Self {
        Self {
            client,
            redfish_endpoint: RedfishEndpoint::from(redfish_endpoint),
            credentials,
        }
    }
}

/// Base URL of the Redfish service.
///
/// Provides convenient conversion methods to build endpoint URLs from `ODataId` paths.
#[derive(Debug, Clone)]
pub struct RedfishEndpoint {
    base_url: Url,
}

impl RedfishEndpoint {
    /// Create a new `RedfishEndpoint` from a base URL
    #[must_use]
    pub const fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Convert a path to a full Redfish endpoint URL
    #[must_use]
    pub fn with_path(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}

impl From<Url> for RedfishEndpoint {
    fn from(url: Url) -> Self {
        Self::new(url)
    }
}

impl<C: HttpClient> Bmc for HttpBmc<C>
where
    C::Error: ResponseError + StdError + Send + Sync + 'static,
{
    type Error = C::Error;

    async fn get<T: DeserializeOwned + Send + Sync + 'static>(
        &self,
        id: &ODataId,
    ) -> Result<Arc<T>, Self::Error> {
        let endpoint_url = self.redfish_endpoint.with_path(id.as_str());
        tracing::debug!(url = %endpoint_url, "GET");
        self.client
            .get::<T>(endpoint_url, &self.credentials)
            .await
            .map(Arc::new)
    }

    async fn action<T: Sync + Send + Serialize, R: Sync + Send + DeserializeOwned>(
        &self,
        action: &Action<T, R>,
        params: &T,
    ) -> Result<ActionResponse<R>, Self::Error> {
        let endpoint_url = self.redfish_endpoint.with_path(&action.target.to_string());
        tracing::debug!(url = %endpoint_url, "POST");
        self.client
            .post(endpoint_url, params, &self.credentials)
            .await
    }
}
