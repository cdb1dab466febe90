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

use serde::Serialize;
use std::error::Error as StdError;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;

/// Target state of a physical disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PdState {
    Offline,
    Online,
}

impl PdState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offline => "Offline",
            Self::Online => "Online",
        }
    }
}

impl Display for PdState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.as_str().fmt(f)
    }
}

/// Value that is neither `offline` nor `online`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPdState(pub String);

impl Display for InvalidPdState {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "invalid disk state \"{}\", expected \"offline\" or \"online\"",
            self.0
        )
    }
}

impl StdError for InvalidPdState {}

impl FromStr for PdState {
    type Err = InvalidPdState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("offline") {
            Ok(Self::Offline)
        } else if s.eq_ignore_ascii_case("online") {
            Ok(Self::Online)
        } else {
            Err(InvalidPdState(s.into()))
        }
    }
}

/// Parameters of `DellRaidService.ChangePDState`.
#[derive(Debug, Serialize)]
pub struct ChangePdStateRequest {
    #[serde(rename = "State")]
    pub state: PdState,
    #[serde(rename = "TargetFQDD")]
    pub target_fqdd: String,
}
