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
use crate::managers::JobMonitor;
use crate::oem::dell::raid_service_id;
use crate::schema::raid_service::ChangePdStateRequest;
use crate::schema::raid_service::PdState;
use crate::Error;
use idrac_raid_core::Action;
use idrac_raid_core::ActionTarget;
use idrac_raid_core::Bmc;
use idrac_raid_core::ODataId;
use idrac_raid_core::StatusCode;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Dell RAID service of the iDRAC.
pub struct RaidService<B: Bmc> {
    bmc: Arc<B>,
}

impl<B: Bmc> RaidService<B> {
    pub(crate) const fn new(bmc: Arc<B>) -> Self {
        Self { bmc }
    }

    /// Target of the `ChangePDState` action.
    #[must_use]
    pub fn change_pd_state_target() -> ActionTarget {
        ActionTarget::from(&raid_service_id().join("Actions/DellRaidService.ChangePDState"))
    }

    /// Request the physical disk `disk` (FQDD) to switch to `state`.
    ///
    /// The iDRAC runs the change as a job; the returned monitor tracks
    /// the job announced in the `Location` header.
    ///
    /// # Errors
    ///
    /// - `Error::ChangeStateRejected` if the iDRAC answered with a status
    ///   other than 200 or 202 (RAID 0 member disks are rejected this way)
    /// - `Error::MissingJobId` if the response did not point to a job
    /// - `Error::Bmc` if the request failed
    pub async fn change_pd_state(
        &self,
        disk: &str,
        state: PdState,
    ) -> Result<JobMonitor<B>, Error<B>> {
        let action = Action::<ChangePdStateRequest, JsonValue>::new(Self::change_pd_state_target());
        let request = ChangePdStateRequest {
            state,
            target_fqdd: disk.into(),
        };
        tracing::debug!(disk, %state, "changing physical disk state");
        let response = action
            .run(self.bmc.as_ref(), &request)
            .await
            .map_err(|err| {
                Error::on_status(err, |status, body| Error::ChangeStateRejected {
                    status,
                    body: body.cloned(),
                })
            })?;
        if response.status != StatusCode::OK && response.status != StatusCode::ACCEPTED {
            return Err(Error::ChangeStateRejected {
                status: response.status,
                body: Some(response.data),
            });
        }
        let location = response.location.ok_or(Error::MissingJobId)?;
        let job_id = ODataId::from(location).last_segment().to_string();
        if job_id.is_empty() {
            return Err(Error::MissingJobId);
        }
        Ok(JobMonitor::new(self.bmc.clone(), JobId::new(job_id)))
    }
}
