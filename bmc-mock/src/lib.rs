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

pub mod expect;

#[doc(inline)]
pub use expect::Expect;
pub use expect::ExpectedRequest;
pub use expect::MockResponse;

use idrac_raid_core::Action;
use idrac_raid_core::ActionResponse;
use idrac_raid_core::ActionTarget;
use idrac_raid_core::Bmc as IdracBmc;
use idrac_raid_core::ODataId;
use idrac_raid_core::ResponseError;
use idrac_raid_core::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::from_value;
use serde_json::to_value;
use serde_json::Error as JsonError;
use serde_json::Value as JsonValue;
use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum Error {
    ErrorResponse(Box<dyn StdError + Send + Sync>),
    Status(StatusCode, JsonValue),
    MutexLock(String),
    NothingIsExpected,
    BadResponseJson(JsonError),
    UnexpectedGet(ODataId, ExpectedRequest),
    UnexpectedAction(ActionTarget, String, ExpectedRequest),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ErrorResponse(err) => write!(f, "response: {err}"),
            Self::Status(status, _) => write!(f, "status: {status}"),
            Self::MutexLock(err) => write!(f, "lock error: {err}"),
            Self::NothingIsExpected => {
                write!(f, "nothing is expected to happen but something happened")
            }
            Self::BadResponseJson(err) => write!(f, "bad json response: {err}"),
            Self::UnexpectedGet(id, expected) => {
                write!(f, "unexpected get: {id}; expected: {expected:?}")
            }
            Self::UnexpectedAction(id, json, expected) => {
                write!(
                    f,
                    "unexpected action: {id}; json: {json} expected: {expected:?}"
                )
            }
        }
    }
}

impl StdError for Error {}

impl ResponseError for Error {
    fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status, _) => Some(*status),
            _ => None,
        }
    }

    fn body(&self) -> Option<&JsonValue> {
        match self {
            Self::Status(_, body) => Some(body),
            _ => None,
        }
    }
}

impl Error {
    pub fn mutex_lock<T>(err: PoisonError<T>) -> Self {
        Self::MutexLock(err.to_string())
    }
}

/// Mocked BMC.
///
/// Requests must arrive in the order their expectations were added;
/// each request consumes one expectation.
pub struct Bmc<E> {
    expect: Mutex<VecDeque<Expect<E>>>,
}

impl<E> Default for Bmc<E> {
    fn default() -> Self {
        Self {
            expect: Mutex::new(VecDeque::new()),
        }
    }
}

impl<E> Bmc<E> {
    /// Queue the next expected request.
    pub fn expect(&self, exp: Expect<E>) {
        let expect: &mut VecDeque<Expect<E>> = &mut self.expect.lock().expect("not poisoned");
        expect.push_back(exp);
    }

    /// Number of expectations not consumed yet.
    pub fn remaining(&self) -> usize {
        self.expect.lock().expect("not poisoned").len()
    }

    fn next_expect(&self) -> Result<Expect<E>, Error> {
        self.expect
            .lock()
            .map_err(Error::mutex_lock)?
            .pop_front()
            .ok_or(Error::NothingIsExpected)
    }
}

/// Turn an expected response into the call result. Statuses rejected
/// by `accepted` become [`Error::Status`].
fn into_result<R, E>(
    response: Result<MockResponse, E>,
    accepted: fn(StatusCode) -> bool,
) -> Result<ActionResponse<R>, Error>
where
    R: DeserializeOwned,
    E: StdError + Send + Sync + 'static,
{
    let response = response.map_err(|err| Error::ErrorResponse(Box::new(err)))?;
    if !accepted(response.status) {
        return Err(Error::Status(response.status, response.body));
    }
    let data: R = from_value(response.body).map_err(Error::BadResponseJson)?;
    Ok(ActionResponse {
        status: response.status,
        location: response.location,
        data,
    })
}

impl<E> IdracBmc for Bmc<E>
where
    E: StdError + Send + Sync + 'static,
{
    type Error = Error;

    async fn get<T: DeserializeOwned + Send + Sync + 'static>(
        &self,
        in_id: &ODataId,
    ) -> Result<Arc<T>, Self::Error> {
        let expect = self.next_expect()?;
        match expect {
            Expect {
                request: ExpectedRequest::Get { id },
                response,
            } if id == *in_id => {
                into_result::<T, E>(response, |status| status == StatusCode::OK)
                    .map(|r| Arc::new(r.data))
            }
            _ => Err(Error::UnexpectedGet(in_id.clone(), expect.request)),
        }
    }

    async fn action<T: Send + Sync + Serialize, R: Send + Sync + DeserializeOwned>(
        &self,
        action: &Action<T, R>,
        params: &T,
    ) -> Result<ActionResponse<R>, Self::Error> {
        let expect = self.next_expect()?;
        let in_request = to_value(params).expect("json serializable");
        match expect {
            Expect {
                request: ExpectedRequest::Action { target, request },
                response,
            } if target == action.target && request == in_request => {
                into_result(response, |status| status.is_success())
            }
            _ => Err(Error::UnexpectedAction(
                action.target.clone(),
                in_request.to_string(),
                expect.request,
            )),
        }
    }
}
