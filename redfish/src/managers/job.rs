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

use crate::managers::manager_id;
use crate::schema::job::Job;
use crate::Error;
use idrac_raid_core::Bmc;
use idrac_raid_core::ODataId;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio::time::Instant;

/// Identifier of an iDRAC job, e.g. `JID_123456789012`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `@odata.id` of the job resource.
    #[must_use]
    pub fn odata_id(&self) -> ODataId {
        manager_id().join("Jobs").join(&self.0)
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// How often and for how long a job is polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            timeout: Duration::from_secs(2 * 60 * 60),
        }
    }
}

impl PollPolicy {
    #[must_use]
    pub const fn with_interval(self, interval: Duration) -> Self {
        Self { interval, ..self }
    }

    #[must_use]
    pub const fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }
}

/// Handle to a job started on the iDRAC.
pub struct JobMonitor<B: Bmc> {
    bmc: Arc<B>,
    job_id: JobId,
}

impl<B: Bmc> JobMonitor<B> {
    /// Create a monitor of an already started job.
    pub const fn new(bmc: Arc<B>, job_id: JobId) -> Self {
        Self { bmc, job_id }
    }

    #[must_use]
    pub const fn job_id(&self) -> &JobId {
        &self.job_id
    }

    /// Fetch current job status.
    ///
    /// # Errors
    ///
    /// Returns `Error::JobStatusUnavailable` if the iDRAC answered
    /// with a status other than 200 and `Error::Bmc` if the request failed.
    pub async fn status(&self) -> Result<Arc<Job>, Error<B>> {
        self.bmc
            .get::<Job>(&self.job_id.odata_id())
            .await
            .map_err(|err| {
                Error::on_status(err, |status, body| Error::JobStatusUnavailable {
                    job_id: self.job_id.clone(),
                    status,
                    body: body.cloned(),
                })
            })
    }

    /// Poll the job until it completes.
    ///
    /// Each poll checks, in order: the status request, the elapsed
    /// time against `policy.timeout`, failure and completion. Jobs
    /// still in progress are passed to `on_progress` before sleeping
    /// `policy.interval`.
    ///
    /// # Errors
    ///
    /// - `Error::JobStatusUnavailable` / `Error::Bmc` if status request failed
    /// - `Error::JobTimeout` if the job did not finish in time
    /// - `Error::JobFailed` if the job reported a failure
    pub async fn wait(
        &self,
        policy: &PollPolicy,
        mut on_progress: impl FnMut(&Job),
    ) -> Result<Arc<Job>, Error<B>> {
        self.wait_with(policy, |job| {
            on_progress(job);
            ControlFlow::Continue(())
        })
        .await
    }

    /// Same as [`JobMonitor::wait`], but polling stops as soon as
    /// `on_progress` breaks.
    ///
    /// # Errors
    ///
    /// Errors of [`JobMonitor::wait`], and `Error::JobWaitStopped` if
    /// `on_progress` returned [`ControlFlow::Break`].
    pub async fn wait_with(
        &self,
        policy: &PollPolicy,
        mut on_progress: impl FnMut(&Job) -> ControlFlow<()>,
    ) -> Result<Arc<Job>, Error<B>> {
        let start = Instant::now();
        loop {
            let job = self.status().await?;
            let elapsed = start.elapsed();
            tracing::debug!(
                job_id = %self.job_id,
                state = ?job.job_state,
                message = %job.message,
                elapsed_secs = elapsed.as_secs(),
                "job status"
            );
            if elapsed >= policy.timeout {
                return Err(Error::JobTimeout {
                    job_id: self.job_id.clone(),
                    elapsed,
                });
            }
            if job.is_failed() {
                return Err(Error::JobFailed {
                    job_id: self.job_id.clone(),
                    message: job.message.clone(),
                });
            }
            if job.is_completed() {
                return Ok(job);
            }
            if on_progress(&job).is_break() {
                return Err(Error::JobWaitStopped {
                    job_id: self.job_id.clone(),
                });
            }
            sleep(policy.interval).await;
        }
    }
}
