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
use serde::de;
use serde::Deserialize;
use serde::Deserializer;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

/// Property keys containing any of these are left out of the
/// completion report.
const REPORT_EXCLUDED: &[&str] = &["odata", "MessageArgs", "TargetSettingsURI"];

/// State of an iDRAC job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum JobState {
    New,
    Scheduled,
    Running,
    Waiting,
    Paused,
    ReadyForExecution,
    Downloading,
    Downloaded,
    Completed,
    CompletedWithErrors,
    Failed,
    /// State this crate does not name.
    #[serde(other)]
    Unknown,
}

/// `/redfish/v1/Managers/iDRAC.Embedded.1/Jobs/{id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub job_state: JobState,
    pub message: String,
    fields: Vec<(String, JsonValue)>,
}

impl Job {
    /// All properties of the job in response order.
    #[must_use]
    pub fn fields(&self) -> &[(String, JsonValue)] {
        &self.fields
    }

    /// Properties worth showing once the job completed, rendered as
    /// `(name, value)` pairs in response order.
    #[must_use]
    pub fn report(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|(name, _)| !REPORT_EXCLUDED.iter().any(|key| name.contains(key)))
            .map(|(name, value)| (name.clone(), display_value(value)))
            .collect()
    }

    /// Failure is reported either by state or by a message mentioning it.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.job_state == JobState::Failed || self.message.to_lowercase().contains("fail")
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.job_state == JobState::Completed
    }
}

fn required_field<T, E>(fields: &JsonMap<String, JsonValue>, name: &'static str) -> Result<T, E>
where
    T: for<'a> Deserialize<'a>,
    E: de::Error,
{
    let value = fields.get(name).ok_or_else(|| E::missing_field(name))?;
    T::deserialize(value).map_err(|err| E::custom(format!("{name}: {err}")))
}

impl<'de> Deserialize<'de> for Job {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = JsonMap::<String, JsonValue>::deserialize(deserializer)?;
        Ok(Self {
            job_state: required_field(&fields, "JobState")?,
            message: required_field(&fields, "Message")?,
            fields: fields.into_iter().collect(),
        })
    }
}
