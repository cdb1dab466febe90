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

use crate::schema::display_value;
use idrac_raid_core::Reference;
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

/// `Storage/{controller}/Volumes`.
#[derive(Debug, Deserialize)]
pub struct VolumeCollection {
    #[serde(rename = "Members")]
    pub members: Vec<Reference>,
}

/// Property of a volume shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeDetail {
    /// `VolumeType` or `RAIDType` with its value.
    Type { name: String, value: String },
    /// Identifier of a member disk from `Links.Drives`.
    Disk(String),
}

/// Volume as reported under `Storage/Volumes/{volume}`.
///
/// Details are kept in the order the properties appear in the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub details: Vec<VolumeDetail>,
}

#[derive(Deserialize)]
struct VolumeLinks {
    #[serde(rename = "Drives")]
    drives: Vec<Reference>,
}

impl<'de> Deserialize<'de> for Volume {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = JsonMap::<String, JsonValue>::deserialize(deserializer)?;
        let mut details = Vec::new();
        for (name, value) in fields {
            if name == "VolumeType" || name == "RAIDType" {
                details.push(VolumeDetail::Type {
                    value: display_value(&value),
                    name,
                });
            } else if name == "Links" {
                let links = VolumeLinks::deserialize(value)
                    .map_err(|err| de::Error::custom(format!("Links: {err}")))?;
                details.extend(
                    links
                        .drives
                        .iter()
                        .map(|drive| VolumeDetail::Disk(drive.id().last_segment().into())),
                );
            }
        }
        Ok(Self { details })
    }
}
