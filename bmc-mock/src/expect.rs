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

//! Expectations for Bmc Mock.

use idrac_raid_core::ActionTarget;
use idrac_raid_core::ODataId;
use idrac_raid_core::StatusCode;
use serde_json::from_str;
use serde_json::Value as JsonValue;
use std::fmt::Display;

pub type Response<E> = Result<MockResponse, E>;

/// Request expected by BMC.
#[derive(Debug)]
pub enum ExpectedRequest {
    /// Expected Get.
    Get { id: ODataId },
    /// Expected ActionTarget
    Action {
        target: ActionTarget,
        request: JsonValue,
    },
}

/// What the mocked service answers with.
///
/// A `status` other than `200 OK` for a get, or a non-success one for
/// an action, is returned to the caller as [`crate::Error::Status`]
/// carrying `body`.
#[derive(Debug)]
pub struct MockResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: JsonValue,
}

impl MockResponse {
    fn ok(body: impl Display) -> Self {
        Self {
            status: StatusCode::OK,
            location: None,
            body: from_str(&body.to_string()).expect("invalid json"),
        }
    }
}

/// Expectation for the tests.
#[derive(Debug)]
pub struct Expect<E> {
    pub request: ExpectedRequest,
    pub response: Response<E>,
}

impl<E> Expect<E> {
    pub fn get(uri: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                id: uri.to_string().into(),
            },
            response: Ok(MockResponse::ok(response)),
        }
    }

    /// Get that the service answers with `status`.
    pub fn get_status(uri: impl Display, status: u16, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                id: uri.to_string().into(),
            },
            response: Ok(MockResponse {
                status: StatusCode::from_u16(status).expect("valid status"),
                ..MockResponse::ok(response)
            }),
        }
    }

    /// Get that fails before any response is received.
    pub fn get_error(uri: impl Display, error: E) -> Self {
        Expect {
            request: ExpectedRequest::Get {
                id: uri.to_string().into(),
            },
            response: Err(error),
        }
    }

    pub fn action(uri: impl Display, request: impl Display, response: impl Display) -> Self {
        Expect {
            request: ExpectedRequest::Action {
                target: ActionTarget::new(uri.to_string()),
                request: from_str(&request.to_string()).expect("invalid json"),
            },
            response: Ok(MockResponse::ok(response)),
        }
    }

    /// Action answered with `status` and an optional `Location` header.
    pub fn action_status(
        uri: impl Display,
        request: impl Display,
        status: u16,
        location: Option<&str>,
        response: impl Display,
    ) -> Self {
        Expect {
            request: ExpectedRequest::Action {
                target: ActionTarget::new(uri.to_string()),
                request: from_str(&request.to_string()).expect("invalid json"),
            },
            response: Ok(MockResponse {
                status: StatusCode::from_u16(status).expect("valid status"),
                location: location.map(ToString::to_string),
                ..MockResponse::ok(response)
            }),
        }
    }
}
