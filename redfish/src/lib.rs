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

//! Physical disk state management on Dell iDRAC over Redfish.
//!
//! The entry point is [`Idrac`], created by probing the Dell RAID
//! service. From there:
//!
//! - [`Idrac::storage_controllers`] enumerates storage controllers;
//! - [`StorageController::drives`] lists physical disks and their RAID status;
//! - [`StorageController::volumes`] lists virtual disks;
//! - [`RaidService::change_pd_state`] switches a disk online or offline
//!   and returns a [`JobMonitor`] that polls the resulting job.
//!
//! All operations run over any [`idrac_raid_core::Bmc`] implementation.
//!
//! ```rust,no_run
//! # use idrac_raid::{Idrac, PdState, PollPolicy};
//! # async fn example<B: idrac_raid_core::Bmc>(bmc: std::sync::Arc<B>) -> Result<(), idrac_raid::Error<B>> {
//! let idrac = Idrac::new(bmc).await?;
//! let job = idrac
//!     .raid_service()
//!     .change_pd_state("Disk.Bay.4:Enclosure.Internal.0-1:RAID.Slot.6-1", PdState::Offline)
//!     .await?;
//! job.wait(&PollPolicy::default(), |job| println!("{}", job.message)).await?;
//! # Ok(())
//! # }
//! ```

/// Errors of the RAID operations.
pub mod error;
/// Manager resources (jobs).
pub mod managers;
/// OEM extensions.
pub mod oem;
/// Wire types.
pub mod schema;
/// Computer system resources.
pub mod systems;

mod idrac;

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use idrac::Idrac;
#[doc(inline)]
pub use managers::JobId;
#[doc(inline)]
pub use managers::JobMonitor;
#[doc(inline)]
pub use managers::PollPolicy;
#[doc(inline)]
pub use oem::dell::RaidService;
#[doc(inline)]
pub use schema::job::Job;
#[doc(inline)]
pub use schema::job::JobState;
#[doc(inline)]
pub use schema::raid_service::PdState;
#[doc(inline)]
pub use schema::volume::VolumeDetail;
#[doc(inline)]
pub use systems::PhysicalDisk;
#[doc(inline)]
pub use systems::StorageController;
#[doc(inline)]
pub use systems::VirtualDisk;
