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

//! Computer system resources.

/// Storage controllers, physical and virtual disks.
pub mod storage;

#[doc(inline)]
pub use storage::PhysicalDisk;
#[doc(inline)]
pub use storage::StorageController;
#[doc(inline)]
pub use storage::VirtualDisk;

use idrac_raid_core::ODataId;

/// `@odata.id` of the iDRAC computer system.
#[must_use]
pub fn system_id() -> ODataId {
    ODataId::service_root().join("Systems/System.Embedded.1")
}

/// `@odata.id` of the system storage collection.
#[must_use]
pub fn storage_id() -> ODataId {
    system_id().join("Storage")
}
