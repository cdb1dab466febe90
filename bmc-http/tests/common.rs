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

#[cfg(feature = "reqwest")]
#[allow(dead_code)]
pub mod test_utils {
    use idrac_raid_bmc_http::reqwest::Client;
    use idrac_raid_bmc_http::HttpBmc;
    use idrac_raid_core::Action;
    use idrac_raid_core::ActionTarget;
    use idrac_raid_core::BmcCredentials;
    use idrac_raid_core::ODataId;
    use serde::Deserialize;
    use serde::Serialize;
    use url::Url;
    use wiremock::MockServer;

    /// `root:password` in basic auth encoding.
    pub const BASIC_AUTH: &str = "Basic cm9vdDpwYXNzd29yZA==";

    /// Test resource struct used across integration tests
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub struct TestResource {
        #[serde(rename = "@odata.id")]
        pub id: ODataId,
        #[serde(rename = "Name")]
        pub name: String,
        #[serde(rename = "Value")]
        pub value: i32,
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub struct ActionRequest {
        #[serde(rename = "State")]
        pub state: String,
        #[serde(rename = "TargetFQDD")]
        pub target_fqdd: String,
    }

    pub fn create_odata_id(s: &str) -> ODataId {
        ODataId::from(s.to_string())
    }

    pub fn create_test_action<R>(target: &str) -> Action<ActionRequest, R> {
        Action::new(ActionTarget::new(target.to_string()))
    }

    pub fn create_test_resource(path: &str, name: &str, value: i32) -> TestResource {
        TestResource {
            id: create_odata_id(path),
            name: name.to_string(),
            value,
        }
    }

    pub fn create_test_credentials() -> BmcCredentials {
        BmcCredentials::new("root".to_string(), "password".to_string())
    }

    pub fn create_test_bmc(mock_server: &MockServer) -> HttpBmc<Client> {
        let client = Client::new().unwrap();
        let credentials = create_test_credentials();
        HttpBmc::new(client, Url::parse(&mock_server.uri()).unwrap(), credentials)
    }

    pub mod paths {
        pub const RAID_SERVICE: &str = "/redfish/v1/Dell/Systems/System.Embedded.1/DellRaidService";
        pub const CHANGE_PD_STATE: &str = "/redfish/v1/Dell/Systems/System.Embedded.1/DellRaidService/Actions/DellRaidService.ChangePDState";
        pub const STORAGE: &str = "/redfish/v1/Systems/System.Embedded.1/Storage";
        pub const JOB: &str = "/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/JID_12345";
    }
}
