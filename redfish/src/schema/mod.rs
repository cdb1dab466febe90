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

//! Wire types of the iDRAC resources read by this crate.
//!
//! Only the properties the RAID operations consume are typed. A missing
//! required property fails deserialization, so malformed responses are
//! rejected at the transport boundary with the JSON path of the problem.

/// Dell OEM RAID service.
pub mod raid_service;
/// Storage controllers and drives.
pub mod storage;
/// Volumes (virtual disks).
pub mod volume;
/// Manager jobs.
pub mod job;

use serde_json::Value as JsonValue;

/// Render a property value for reports: strings without quotes,
/// everything else as compact JSON.
#[must_use]
pub fn display_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        v => v.to_string(),
    }
}
