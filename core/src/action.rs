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

//! Redfish actions
//!
//! An action is a POST to a fixed `target` URI with typed parameters.
//! Long-running actions answer `202 Accepted` and point to the job
//! that tracks them in the `Location` header, so the response keeps
//! the status and that header next to the decoded body.

use crate::Bmc;
use crate::ODataId;
use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use std::marker::PhantomData;

/// Type for `target` field of Action.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ActionTarget(String);

impl ActionTarget {
    pub fn new(v: String) -> Self {
        Self(v)
    }
}

impl From<&ODataId> for ActionTarget {
    fn from(id: &ODataId) -> Self {
        Self(id.to_string())
    }
}

impl Display for ActionTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Action with parameters `T` that returns `R`.
#[derive(Debug)]
pub struct Action<T, R> {
    pub target: ActionTarget,
    _marker: PhantomData<T>,
    _marker_retval: PhantomData<R>,
}

impl<T, R> Action<T, R> {
    #[must_use]
    pub const fn new(target: ActionTarget) -> Self {
        Self {
            target,
            _marker: PhantomData,
            _marker_retval: PhantomData,
        }
    }
}

impl<T: Send + Sync + Serialize, R: Send + Sync + DeserializeOwned> Action<T, R> {
    /// Run specific action with parameters passed as argument.
    ///
    /// # Errors
    ///
    /// Returns the BMC error if the request fails or the service rejects it.
    pub async fn run<B: Bmc>(&self, bmc: &B, params: &T) -> Result<ActionResponse<R>, B::Error> {
        bmc.action::<T, R>(self, params).await
    }
}

/// Successful action response.
#[derive(Debug, Clone)]
pub struct ActionResponse<R> {
    /// HTTP status (`200 OK` or `202 Accepted` for the actions used here).
    pub status: StatusCode,
    /// Value of the `Location` header, if the service sent one.
    pub location: Option<String>,
    /// Decoded body. Services that send no body are decoded from `null`.
    pub data: R,
}
