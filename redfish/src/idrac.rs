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
use crate::oem::dell::RaidService;
use crate::schema::storage::StorageCollection;
use crate::systems::storage_id;
use crate::systems::StorageController;
use crate::Error;
use idrac_raid_core::Bmc;
use idrac_raid_core::StatusCode;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// iDRAC that supports RAID configuration over Redfish.
///
/// Obtained through [`Idrac::new`], which checks that the firmware
/// exposes the Dell RAID service before anything else is done.
pub struct Idrac<B: Bmc> {
    bmc: Arc<B>,
}

impl<B: Bmc> Idrac<B> {
    /// Probe the Dell RAID service.
    ///
    /// # Errors
    ///
    /// - `Error::AuthenticationFailed` if the iDRAC answered 401
    /// - `Error::RaidServiceNotSupported` for any other status than 200
    /// - `Error::Bmc` if the request failed without a response
    pub async fn new(bmc: Arc<B>) -> Result<Self, Error<B>> {
        bmc.get::<JsonValue>(&raid_service_id())
            .await
            .map_err(|err| {
                Error::on_status(err, |status, _| {
                    if status == StatusCode::UNAUTHORIZED {
                        Error::AuthenticationFailed
                    } else {
                        Error::RaidServiceNotSupported(status)
                    }
                })
            })?;
        Ok(Self { bmc })
    }

    /// Storage controllers of the system in member order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Bmc` if the storage collection cannot be read.
    pub async fn storage_controllers(&self) -> Result<Vec<StorageController<B>>, Error<B>> {
        let collection = self
            .bmc
            .get::<StorageCollection>(&storage_id())
            .await
            .map_err(Error::Bmc)?;
        Ok(collection
            .members
            .iter()
            .map(|member| self.storage_controller(member.id().last_segment()))
            .collect())
    }

    /// Handle to the controller with FQDD `id`.
    #[must_use]
    pub fn storage_controller(&self, id: impl Into<String>) -> StorageController<B> {
        StorageController::new(self.bmc.clone(), id.into())
    }

    /// Dell RAID service, used to change physical disk states.
    #[must_use]
    pub fn raid_service(&self) -> RaidService<B> {
        RaidService::new(self.bmc.clone())
    }

    /// Monitor of an existing job.
    #[must_use]
    pub fn job(&self, job_id: JobId) -> JobMonitor<B> {
        JobMonitor::new(self.bmc.clone(), job_id)
    }
}
