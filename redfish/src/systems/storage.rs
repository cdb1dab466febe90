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

use crate::schema::storage::Drive as DriveSchema;
use crate::schema::storage::Storage as StorageSchema;
use crate::schema::volume::Volume as VolumeSchema;
use crate::schema::volume::VolumeCollection;
use crate::schema::volume::VolumeDetail;
use crate::systems::storage_id;
use crate::Error;
use idrac_raid_core::Bmc;
use idrac_raid_core::ODataId;
use std::sync::Arc;

/// Storage controller identified by its FQDD, e.g. `RAID.Integrated.1-1`.
///
/// Creating the handle does not touch the BMC; the controller is not
/// validated against the enumeration.
pub struct StorageController<B: Bmc> {
    bmc: Arc<B>,
    id: String,
}

impl<B: Bmc> StorageController<B> {
    /// Create a new storage controller handle.
    pub(crate) const fn new(bmc: Arc<B>, id: String) -> Self {
        Self { bmc, id }
    }

    /// FQDD of the controller.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn odata_id(&self) -> ODataId {
        storage_id().join(&self.id)
    }

    /// Physical disks behind this controller with their RAID status.
    ///
    /// The controller is read first; each listed drive is then read
    /// one after another. A controller without drives yields an empty
    /// list and no further requests.
    ///
    /// # Errors
    ///
    /// Returns `Error::Bmc` if any request fails or a response misses
    /// a required property.
    pub async fn drives(&self) -> Result<Vec<PhysicalDisk>, Error<B>> {
        let storage = self
            .bmc
            .get::<StorageSchema>(&self.odata_id())
            .await
            .map_err(Error::Bmc)?;
        let mut disks = Vec::with_capacity(storage.drives.len());
        for drive_ref in &storage.drives {
            let id = drive_ref.id().last_segment().to_string();
            let drive = self
                .bmc
                .get::<DriveSchema>(&storage_id().join("Drives").join(&id))
                .await
                .map_err(Error::Bmc)?;
            disks.push(PhysicalDisk {
                id,
                raid_status: drive.oem.dell.dell_physical_disk.raid_status.clone(),
            });
        }
        Ok(disks)
    }

    /// Virtual disks configured on this controller.
    ///
    /// Same access pattern as [`Self::drives`]: the volume collection,
    /// then each volume in member order.
    ///
    /// # Errors
    ///
    /// Returns `Error::Bmc` if any request fails or a response misses
    /// a required property.
    pub async fn volumes(&self) -> Result<Vec<VirtualDisk>, Error<B>> {
        let collection = self
            .bmc
            .get::<VolumeCollection>(&self.odata_id().join("Volumes"))
            .await
            .map_err(Error::Bmc)?;
        let mut volumes = Vec::with_capacity(collection.members.len());
        for member in &collection.members {
            let id = member.id().last_segment().to_string();
            let volume = self
                .bmc
                .get::<VolumeSchema>(&storage_id().join("Volumes").join(&id))
                .await
                .map_err(Error::Bmc)?;
            volumes.push(VirtualDisk {
                id,
                details: volume.details.clone(),
            });
        }
        Ok(volumes)
    }
}

/// Physical disk and its RAID status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicalDisk {
    pub id: String,
    pub raid_status: String,
}

/// Virtual disk with its type properties and member disks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualDisk {
    pub id: String,
    pub details: Vec<VolumeDetail>,
}
