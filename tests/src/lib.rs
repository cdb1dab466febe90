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

//! This is tests support lib.

/// Errors used in tests.
pub mod error;

#[doc(inline)]
pub use error::TestError;

/// Used in tests for `@odata.id` fields.
pub const ODATA_ID: &str = "@odata.id";

use idrac_raid_bmc_mock::Bmc as MockBmc;
use idrac_raid_bmc_mock::Expect as MockExpect;
use serde_json::json;
use serde_json::Value;

pub type Bmc = MockBmc<TestError>;
pub type Expect = MockExpect<TestError>;

/// Resource paths of an iDRAC.
pub mod paths {
    pub const RAID_SERVICE: &str = "/redfish/v1/Dell/Systems/System.Embedded.1/DellRaidService";
    pub const CHANGE_PD_STATE: &str = "/redfish/v1/Dell/Systems/System.Embedded.1/DellRaidService/Actions/DellRaidService.ChangePDState";
    pub const STORAGE: &str = "/redfish/v1/Systems/System.Embedded.1/Storage";
    pub const JOBS: &str = "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs";
}

/// Reference object pointing to `id`.
#[must_use]
pub fn reference(id: &str) -> Value {
    json!({ ODATA_ID: id })
}

/// `@odata.id` of drive `disk`.
#[must_use]
pub fn drive_id(disk: &str) -> String {
    format!("{}/Drives/{disk}", paths::STORAGE)
}

/// `@odata.id` of volume `volume`.
#[must_use]
pub fn volume_id(volume: &str) -> String {
    format!("{}/Volumes/{volume}", paths::STORAGE)
}

/// `@odata.id` of job `job_id`.
#[must_use]
pub fn job_id(job_id: &str) -> String {
    format!("{}/{job_id}", paths::JOBS)
}

/// Dell drive with the given RAID status.
#[must_use]
pub fn drive(disk: &str, raid_status: &str) -> Value {
    json!({
        ODATA_ID: drive_id(disk),
        "Id": disk,
        "Name": disk,
        "Oem": {
            "Dell": {
                "DellPhysicalDisk": {
                    "RaidStatus": raid_status
                }
            }
        }
    })
}

/// Job resource as returned by the iDRAC.
#[must_use]
pub fn job(id: &str, state: &str, message: &str, percent: u32) -> Value {
    json!({
        "@odata.context": "/redfish/v1/$metadata#DellJob.DellJob",
        ODATA_ID: job_id(id),
        "@odata.type": "#DellJob.v1_1_0.DellJob",
        "ActualRunningStartTime": null,
        "CompletionTime": null,
        "Description": "Job Instance",
        "Id": id,
        "JobState": state,
        "JobType": "RAIDConfiguration",
        "Message": message,
        "MessageArgs": [],
        "MessageArgs@odata.count": 0,
        "MessageId": "PR19",
        "Name": "Configure: RAID.Mezzanine.1-1",
        "PercentComplete": percent,
        "TargetSettingsURI": null
    })
}
