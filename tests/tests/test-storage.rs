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

//! Integration tests for controller, drive and volume listings.

use idrac_raid::Error;
use idrac_raid::Idrac;
use idrac_raid::PhysicalDisk;
use idrac_raid::VolumeDetail;
use idrac_raid_core::ResponseError;
use idrac_raid_tests::drive;
use idrac_raid_tests::drive_id;
use idrac_raid_tests::paths::RAID_SERVICE;
use idrac_raid_tests::paths::STORAGE;
use idrac_raid_tests::reference;
use idrac_raid_tests::volume_id;
use idrac_raid_tests::Bmc;
use idrac_raid_tests::Expect;
use serde_json::json;
use std::error::Error as StdError;
use std::sync::Arc;
use tokio::test;

const CONTROLLER: &str = "RAID.Integrated.1-1";
const DISK_0: &str = "Disk.Bay.0:Enclosure.Internal.0-1:RAID.Integrated.1-1";
const DISK_1: &str = "Disk.Bay.1:Enclosure.Internal.0-1:RAID.Integrated.1-1";
const VOLUME_0: &str = "Disk.Virtual.0:RAID.Integrated.1-1";
const VOLUME_1: &str = "Disk.Virtual.1:RAID.Integrated.1-1";

async fn idrac(bmc: &Arc<Bmc>) -> Result<Idrac<Bmc>, Box<dyn StdError>> {
    bmc.expect(Expect::get(RAID_SERVICE, json!({ "Id": "DellRaidService" })));
    Idrac::new(bmc.clone()).await.map_err(Into::into)
}

fn controller_id(controller: &str) -> String {
    format!("{STORAGE}/{controller}")
}

#[test]
async fn controllers_in_member_order() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let idrac = idrac(&bmc).await?;
    bmc.expect(Expect::get(
        STORAGE,
        json!({
            "@odata.id": STORAGE,
            "Members": [
                reference(&controller_id("RAID.Mezzanine.1-1")),
                reference(&controller_id("AHCI.Embedded.1-1")),
                reference(&controller_id(CONTROLLER)),
            ],
            "Members@odata.count": 3
        }),
    ));
    let ids: Vec<String> = idrac
        .storage_controllers()
        .await?
        .iter()
        .map(|c| c.id().to_string())
        .collect();
    assert_eq!(ids, vec!["RAID.Mezzanine.1-1", "AHCI.Embedded.1-1", CONTROLLER]);
    Ok(())
}

#[test]
async fn no_controllers() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let idrac = idrac(&bmc).await?;
    bmc.expect(Expect::get(STORAGE, json!({ "Members": [] })));
    assert!(idrac.storage_controllers().await?.is_empty());
    Ok(())
}

#[test]
async fn drives_with_raid_status() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let idrac = idrac(&bmc).await?;
    bmc.expect(Expect::get(
        controller_id(CONTROLLER),
        json!({
            "Id": CONTROLLER,
            "Drives": [reference(&drive_id(DISK_0)), reference(&drive_id(DISK_1))]
        }),
    ));
    bmc.expect(Expect::get(drive_id(DISK_0), drive(DISK_0, "Online")));
    bmc.expect(Expect::get(drive_id(DISK_1), drive(DISK_1, "Offline")));

    let disks = idrac.storage_controller(CONTROLLER).drives().await?;
    assert_eq!(
        disks,
        vec![
            PhysicalDisk {
                id: DISK_0.into(),
                raid_status: "Online".into()
            },
            PhysicalDisk {
                id: DISK_1.into(),
                raid_status: "Offline".into()
            },
        ]
    );
    assert_eq!(bmc.remaining(), 0);
    Ok(())
}

#[test]
async fn no_drives_makes_no_further_requests() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let idrac = idrac(&bmc).await?;
    bmc.expect(Expect::get(
        controller_id(CONTROLLER),
        json!({ "Id": CONTROLLER, "Drives": [] }),
    ));
    assert!(idrac.storage_controller(CONTROLLER).drives().await?.is_empty());
    assert_eq!(bmc.remaining(), 0);
    Ok(())
}

#[test]
async fn drive_without_raid_status_fails() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let idrac = idrac(&bmc).await?;
    bmc.expect(Expect::get(
        controller_id(CONTROLLER),
        json!({ "Drives": [reference(&drive_id(DISK_0))] }),
    ));
    bmc.expect(Expect::get(
        drive_id(DISK_0),
        json!({ "Id": DISK_0, "Oem": { "Dell": {} } }),
    ));
    let result = idrac.storage_controller(CONTROLLER).drives().await;
    assert!(matches!(result, Err(Error::Bmc(_))));
    Ok(())
}

#[test]
async fn unknown_controller() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let idrac = idrac(&bmc).await?;
    bmc.expect(Expect::get_status(
        controller_id("RAID.Slot.9-9"),
        404,
        json!({"error": {"@Message.ExtendedInfo": [{"Message": "The resource at the URI is not found."}]}}),
    ));
    match idrac.storage_controller("RAID.Slot.9-9").drives().await {
        Err(err @ Error::Bmc(_)) => {
            assert_eq!(
                err.extended_info(),
                vec!["The resource at the URI is not found.".to_string()]
            );
            if let Error::Bmc(err) = err {
                assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}

#[test]
async fn volumes_keep_response_order() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let idrac = idrac(&bmc).await?;
    bmc.expect(Expect::get(
        format!("{}/Volumes", controller_id(CONTROLLER)),
        json!({
            "Members": [reference(&volume_id(VOLUME_0)), reference(&volume_id(VOLUME_1))]
        }),
    ));
    bmc.expect(Expect::get(
        volume_id(VOLUME_0),
        json!({
            "@odata.id": volume_id(VOLUME_0),
            "VolumeType": "Mirrored",
            "Links": { "Drives": [reference(&drive_id(DISK_0)), reference(&drive_id(DISK_1))] },
            "RAIDType": "RAID1",
            "Name": "Virtual Disk 0"
        }),
    ));
    bmc.expect(Expect::get(
        volume_id(VOLUME_1),
        json!({
            "Links": { "Drives": [] },
            "RAIDType": "RAID0",
            "VolumeType": "NonRedundant"
        }),
    ));

    let volumes = idrac.storage_controller(CONTROLLER).volumes().await?;
    assert_eq!(volumes.len(), 2);
    assert_eq!(volumes[0].id, VOLUME_0);
    assert_eq!(
        volumes[0].details,
        vec![
            VolumeDetail::Type {
                name: "VolumeType".into(),
                value: "Mirrored".into()
            },
            VolumeDetail::Disk(DISK_0.into()),
            VolumeDetail::Disk(DISK_1.into()),
            VolumeDetail::Type {
                name: "RAIDType".into(),
                value: "RAID1".into()
            },
        ]
    );
    assert_eq!(volumes[1].id, VOLUME_1);
    assert_eq!(
        volumes[1].details,
        vec![
            VolumeDetail::Type {
                name: "RAIDType".into(),
                value: "RAID0".into()
            },
            VolumeDetail::Type {
                name: "VolumeType".into(),
                value: "NonRedundant".into()
            },
        ]
    );
    assert_eq!(bmc.remaining(), 0);
    Ok(())
}

#[test]
async fn no_volumes_makes_no_further_requests() -> Result<(), Box<dyn StdError>> {
    let bmc = Arc::new(Bmc::default());
    let idrac = idrac(&bmc).await?;
    bmc.expect(Expect::get(
        format!("{}/Volumes", controller_id(CONTROLLER)),
        json!({ "Members": [], "Members@odata.count": 0 }),
    ));
    assert!(idrac.storage_controller(CONTROLLER).volumes().await?.is_empty());
    assert_eq!(bmc.remaining(), 0);
    Ok(())
}
