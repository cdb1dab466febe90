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

//! Integration tests for the RAID service probe.

use idrac_raid::Error;
use idrac_raid::Idrac;
use idrac_raid_core::ResponseError;
use idrac_raid_core::StatusCode;
use idrac_raid_tests::paths::RAID_SERVICE;
use idrac_raid_tests::Bmc;
use idrac_raid_tests::Expect;
use idrac_raid_tests::TestError;
use serde_json::json;
use std::sync::Arc;
use tokio::test;

#[test]
async fn probe_succeeds() {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get(
        RAID_SERVICE,
        json!({
            "@odata.id": RAID_SERVICE,
            "Id": "DellRaidService",
            "Name": "DellRaidService"
        }),
    ));
    assert!(Idrac::new(bmc.clone()).await.is_ok());
    assert_eq!(bmc.remaining(), 0);
}

#[test]
async fn probe_unauthorized() {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get_status(
        RAID_SERVICE,
        401,
        json!({"error": {"code": "Base.1.12.GeneralError", "message": "Unauthorized"}}),
    ));
    let result = Idrac::new(bmc.clone()).await;
    assert!(matches!(result, Err(Error::AuthenticationFailed)));
    assert_eq!(bmc.remaining(), 0);
}

#[test]
async fn probe_other_status_is_unsupported() {
    for status in [400, 403, 404, 405, 500, 503] {
        let bmc = Arc::new(Bmc::default());
        bmc.expect(Expect::get_status(RAID_SERVICE, status, json!({})));
        match Idrac::new(bmc.clone()).await {
            Err(Error::RaidServiceNotSupported(got)) => assert_eq!(got.as_u16(), status),
            Err(err) => panic!("status {status}: unexpected error: {err}"),
            Ok(_) => panic!("status {status}: probe must fail"),
        }
        assert_eq!(bmc.remaining(), 0);
    }
}

#[test]
async fn probe_success_other_than_ok_is_unsupported() {
    for status in [202, 204] {
        let bmc = Arc::new(Bmc::default());
        bmc.expect(Expect::get_status(RAID_SERVICE, status, json!(null)));
        match Idrac::new(bmc.clone()).await {
            Err(Error::RaidServiceNotSupported(got)) => assert_eq!(got.as_u16(), status),
            Err(err) => panic!("status {status}: unexpected error: {err}"),
            Ok(_) => panic!("status {status}: probe must fail"),
        }
        assert_eq!(bmc.remaining(), 0);
    }
}

#[test]
async fn probe_transport_failure() {
    let bmc = Arc::new(Bmc::default());
    bmc.expect(Expect::get_error(RAID_SERVICE, TestError::ConnectionRefused));
    match Idrac::new(bmc).await {
        Err(Error::Bmc(err)) => {
            assert_eq!(err.status(), None);
            assert!(err.to_string().contains("connection refused"));
        }
        Err(err) => panic!("unexpected error: {err}"),
        Ok(_) => panic!("probe must fail"),
    }
}

#[test]
async fn unsupported_display() {
    let err: Error<Bmc> = Error::RaidServiceNotSupported(StatusCode::NOT_FOUND);
    assert!(err
        .to_string()
        .starts_with("iDRAC version installed does not support this feature"));
}
