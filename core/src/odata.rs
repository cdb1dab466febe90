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

//! OData identifiers
//!
//! - [`ODataId`]: value of `@odata.id`, the canonical resource path (opaque string)
//! - [`Reference`]: the `{ "@odata.id": ... }` object used by collection
//!   `Members` and by `Links`
//!
//! Notes
//! - These types are intentionally semantic‑unaware; they do not validate content.
//! - The only structure ever read out of an identifier is its last path
//!   segment ([`ODataId::last_segment`]), which on iDRAC is the FQDD of the
//!   referenced component.
//!
//! Example
//! ```rust
//! use idrac_raid_core::ODataId;
//!
//! let id = ODataId::from("/redfish/v1/Systems/System.Embedded.1/Storage/RAID.Integrated.1-1");
//! assert_eq!(id.last_segment(), "RAID.Integrated.1-1");
//! ```

use core::fmt::Display;
use core::fmt::Formatter;
use core::fmt::Result as FmtResult;
use serde::Deserialize;
use serde::Serialize;

/// Type for `@odata.id` identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ODataId(String);

impl ODataId {
    /// Redfish service root id.
    #[must_use]
    pub fn service_root() -> Self {
        Self("/redfish/v1".into())
    }

    /// Append one path segment.
    #[must_use]
    pub fn join(&self, segment: &str) -> Self {
        Self(format!("{}/{segment}", self.0.trim_end_matches('/')))
    }

    /// Last path segment of the identifier.
    ///
    /// A trailing `/` is ignored. Works on absolute URLs as well, which
    /// is what some BMCs put into `Location` headers.
    #[must_use]
    pub fn last_segment(&self) -> &str {
        let trimmed = self.0.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }

    /// Raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ODataId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ODataId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl Display for ODataId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.0.fmt(f)
    }
}

/// Reference to another resource (only `@odata.id` is present).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    #[serde(rename = "@odata.id")]
    odata_id: ODataId,
}

impl Reference {
    /// Identifier of the referenced resource.
    #[must_use]
    pub const fn id(&self) -> &ODataId {
        &self.odata_id
    }
}
