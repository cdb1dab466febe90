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

use crate::managers::JobId;
use idrac_raid_core::Bmc;
use idrac_raid_core::ResponseError;
use idrac_raid_core::StatusCode;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::time::Duration;

/// Errors of the RAID operations.
pub enum Error<B: Bmc> {
    /// Error reported by the BMC transport.
    Bmc(B::Error),
    /// iDRAC rejected the credentials (HTTP 401).
    AuthenticationFailed,
    /// The RAID service probe answered with a status other than 401
    /// or success.
    RaidServiceNotSupported(StatusCode),
    /// `ChangePDState` action answered with a status other than 200/202.
    ChangeStateRejected {
        status: StatusCode,
        body: Option<JsonValue>,
    },
    /// `ChangePDState` was accepted but the response had no `Location`.
    MissingJobId,
    /// The job reported a failure.
    JobFailed { job_id: JobId, message: String },
    /// Job status request was answered with an error status.
    JobStatusUnavailable {
        job_id: JobId,
        status: StatusCode,
        body: Option<JsonValue>,
    },
    /// Job did not reach a terminal state in time.
    JobTimeout { job_id: JobId, elapsed: Duration },
    /// Polling was stopped by the progress callback.
    JobWaitStopped { job_id: JobId },
}

impl<B: Bmc> Error<B> {
    /// Map a transport error that carries an HTTP status with `f`.
    /// Errors without a status stay [`Error::Bmc`].
    pub(crate) fn on_status(
        err: B::Error,
        f: impl FnOnce(StatusCode, Option<&JsonValue>) -> Self,
    ) -> Self {
        match err.status() {
            Some(status) => f(status, err.body()),
            None => Self::Bmc(err),
        }
    }

    /// Messages of the `error.@Message.ExtendedInfo` array of the
    /// response body, when the error carries one.
    #[must_use]
    pub fn extended_info(&self) -> Vec<String> {
        match self {
            Self::ChangeStateRejected { body, .. } | Self::JobStatusUnavailable { body, .. } => {
                body.as_ref().map(extended_info).unwrap_or_default()
            }
            Self::Bmc(err) => err.body().map(extended_info).unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// Extract `Message` of each `error.@Message.ExtendedInfo` entry.
#[must_use]
pub fn extended_info(body: &JsonValue) -> Vec<String> {
    body.pointer("/error/@Message.ExtendedInfo")
        .and_then(JsonValue::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|v| v.get("Message").and_then(JsonValue::as_str))
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl<B: Bmc> Display for Error<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bmc(err) => write!(f, "BMC error: {err}"),
            Self::AuthenticationFailed => write!(
                f,
                "unable to access iDRAC, check to make sure you are passing in valid iDRAC credentials"
            ),
            Self::RaidServiceNotSupported(status) => write!(
                f,
                "iDRAC version installed does not support this feature using Redfish API (status {status})"
            ),
            Self::ChangeStateRejected { status, .. } => {
                write!(f, "POST command failed to change disk state, status code {status} returned")
            }
            Self::MissingJobId => write!(f, "unable to locate job ID in response headers"),
            Self::JobFailed { job_id, message } => {
                write!(f, "job ID {job_id} failed, failed message is: {message}")
            }
            Self::JobStatusUnavailable { job_id, status, .. } => write!(
                f,
                "command failed to check status of job ID {job_id}, return code is {status}"
            ),
            Self::JobTimeout { job_id, elapsed } => write!(
                f,
                "timeout has been hit for job ID {job_id} after {}s",
                elapsed.as_secs()
            ),
            Self::JobWaitStopped { job_id } => {
                write!(f, "stopped waiting for job ID {job_id}")
            }
        }
    }
}

impl<B: Bmc> Debug for Error<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Bmc(err) => f.debug_tuple("Bmc").field(err).finish(),
            Self::AuthenticationFailed => f.write_str("AuthenticationFailed"),
            Self::RaidServiceNotSupported(status) => f
                .debug_tuple("RaidServiceNotSupported")
                .field(status)
                .finish(),
            Self::ChangeStateRejected { status, body } => f
                .debug_struct("ChangeStateRejected")
                .field("status", status)
                .field("body", body)
                .finish(),
            Self::MissingJobId => f.write_str("MissingJobId"),
            Self::JobFailed { job_id, message } => f
                .debug_struct("JobFailed")
                .field("job_id", job_id)
                .field("message", message)
                .finish(),
            Self::JobStatusUnavailable {
                job_id,
                status,
                body,
            } => f
                .debug_struct("JobStatusUnavailable")
                .field("job_id", job_id)
                .field("status", status)
                .field("body", body)
                .finish(),
            Self::JobTimeout { job_id, elapsed } => f
                .debug_struct("JobTimeout")
                .field("job_id", job_id)
                .field("elapsed", elapsed)
                .finish(),
            Self::JobWaitStopped { job_id } => f
                .debug_struct("JobWaitStopped")
                .field("job_id", job_id)
                .finish(),
        }
    }
}

impl<B: Bmc> StdError for Error<B> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Bmc(err) => Some(err),
            _ => None,
        }
    }
}
