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

//! iDRAC manager resources.

/// Jobs tracked by the manager.
pub mod job;

#[doc(inline)]
pub use job::JobId;
#[doc(inline)]
pub use job::JobMonitor;
#[doc(inline)]
pub use job::PollPolicy;

use idrac_raid_core::ODataId;

/// `@odata.id` of the iDRAC manager.
#[must_use]
pub fn manager_id() -> ODataId {
    ODataId::service_root().join("Managers/iDRAC.Embedded.1")
}
