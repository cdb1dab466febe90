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

use idrac_raid_core::Reference;
use serde::Deserialize;

/// `/redfish/v1/Systems/System.Embedded.1/Storage`.
#[derive(Debug, Deserialize)]
pub struct StorageCollection {
    #[serde(rename = "Members")]
    pub members: Vec<Reference>,
}

/// Single storage controller.
#[derive(Debug, Deserialize)]
pub struct Storage {
    #[serde(rename = "Drives")]
    pub drives: Vec<Reference>,
}

/// Physical disk as reported under `Storage/Drives/{disk}`.
#[derive(Debug, Deserialize)]
pub struct Drive {
    #[serde(rename = "Oem")]
    pub oem: DriveOem,
}

#[derive(Debug, Deserialize)]
pub struct DriveOem {
    #[serde(rename = "Dell")]
    pub dell: DellDriveOem,
}

#[derive(Debug, Deserialize)]
pub struct DellDriveOem {
    #[serde(rename = "DellPhysicalDisk")]
    pub dell_physical_disk: DellPhysicalDisk,
}

#[derive(Debug, Deserialize)]
pub struct DellPhysicalDisk {
    /// RAID status of the disk, e.g. `Online`, `Offline`, `Ready`,
    /// `NonRAID`.
    #[serde(rename = "RaidStatus")]
    pub raid_status: String,
}
