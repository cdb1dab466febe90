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

//! Baseboard Management Controller (BMC) client abstraction
//!
//! This module defines the transport-agnostic [`Bmc`] trait, the minimal
//! interface the RAID operations need from a Redfish service (read a
//! resource and invoke an action).
//!
//! Operation semantics:
//! - `get` fetches the resource at the given `@odata.id` and deserializes
//!   it into `T`. Any HTTP status other than `200 OK` is an error.
//! - `action` posts parameters to an action endpoint (`Action.target`) and
//!   returns the response status, the `Location` header (where
//!   asynchronous operations announce their job) and the decoded body.
//!   Any non-success HTTP status is an error.
//!
//! Notes for implementors:
//! - The trait is `Send + Sync` and returns `Send` futures to support use in
//!   async runtimes.
//! - Errors must implement [`ResponseError`] so that callers can tell an
//!   HTTP-level rejection (and its status) apart from a transport failure.

use crate::Action;
use crate::ActionResponse;
use crate::ODataId;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// BMC trait defines access to a Baseboard Management Controller using
/// the Redfish protocol.
pub trait Bmc: Send + Sync {
    /// BMC Error.
    type Error: StdError + ResponseError + Send + Sync + 'static;

    /// Get data of the resource.
    ///
    /// `T` is structure that is used for return type.
    fn get<T: DeserializeOwned + Send + Sync + 'static>(
        &self,
        id: &ODataId,
    ) -> impl Future<Output = Result<Arc<T>, Self::Error>> + Send;

    /// Run action.
    ///
    /// `T` is structure that contains action parameters.
    /// `R` is structure with return type.
    fn action<T: Send + Sync + Serialize, R: Send + Sync + DeserializeOwned>(
        &self,
        action: &Action<T, R>,
        params: &T,
    ) -> impl Future<Output = Result<ActionResponse<R>, Self::Error>> + Send;
}

/// Errors that may carry the HTTP response the BMC answered with.
pub trait ResponseError {
    /// Status of the rejected response. `None` when the request never
    /// produced a response (connection, TLS or decoding failures).
    fn status(&self) -> Option<StatusCode>;

    /// JSON body of the rejected response, if it had one.
    fn body(&self) -> Option<&JsonValue>;
}

/// Credentials used to access the BMC.
///
/// Security notes:
/// - `Debug`/`Display` redact the password.
/// - Prefer short-lived instances and avoid logging credentials.
#[derive(Clone)]
pub struct BmcCredentials {
    /// Username to access BMC.
    pub username: String,
    password: String,
}

impl BmcCredentials {
    /// Create new credentials.
    #[must_use]
    pub const fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Get password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for BmcCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BmcCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for BmcCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BmcCredentials(username: {}, password: [REDACTED])",
            self.username
        )
    }
}
