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

//! Core types shared by the idrac-raid crates.
//!
//! - [`Bmc`]: transport-agnostic access to a Redfish service.
//! - [`ODataId`] / [`Reference`]: resource identity as it appears on the wire.
//! - [`Action`]: typed POST target with its response ([`ActionResponse`]).
//! - [`ResponseError`]: lets callers branch on the HTTP status a
//!   transport error carries.

pub mod action;
pub mod bmc;
pub mod odata;

#[doc(inline)]
pub use action::Action;
#[doc(inline)]
pub use action::ActionResponse;
#[doc(inline)]
pub use action::ActionTarget;
#[doc(inline)]
pub use bmc::Bmc;
#[doc(inline)]
pub use bmc::BmcCredentials;
#[doc(inline)]
pub use bmc::ResponseError;
#[doc(inline)]
pub use odata::ODataId;
#[doc(inline)]
pub use odata::Reference;

/// Re-exported so that implementors and callers agree on one status type.
pub use http::StatusCode;
