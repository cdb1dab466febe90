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

use idrac_raid_bmc_http::reqwest::BmcError;
use idrac_raid_core::Bmc;
use std::error::Error as StdError;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Error as IoError;

/// Errors of the command line tool.
pub enum Error<B: Bmc> {
    /// Arguments did not select exactly one operation.
    InvalidArguments,
    /// iDRAC address does not form a valid URL.
    InvalidAddress(String, url::ParseError),
    /// HTTP client could not be built.
    Client(BmcError),
    /// RAID operation failed.
    Idrac(idrac_raid::Error<B>),
    /// Writing results failed.
    Output(IoError),
}

impl<B: Bmc> From<idrac_raid::Error<B>> for Error<B> {
    fn from(err: idrac_raid::Error<B>) -> Self {
        Self::Idrac(err)
    }
}

impl<B: Bmc> From<IoError> for Error<B> {
    fn from(err: IoError) -> Self {
        Self::Output(err)
    }
}

impl<B: Bmc> Display for Error<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidArguments => write!(
                f,
                "invalid argument values or not all required parameters passed in"
            ),
            Self::InvalidAddress(ip, err) => write!(f, "invalid iDRAC address {ip}: {err}"),
            Self::Client(err) => write!(f, "failed to create HTTP client: {err}"),
            Self::Idrac(err) => Display::fmt(err, f),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl<B: Bmc> Debug for Error<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::InvalidArguments => f.write_str("InvalidArguments"),
            Self::InvalidAddress(ip, err) => f
                .debug_tuple("InvalidAddress")
                .field(ip)
                .field(err)
                .finish(),
            Self::Client(err) => f.debug_tuple("Client").field(err).finish(),
            Self::Idrac(err) => f.debug_tuple("Idrac").field(err).finish(),
            Self::Output(err) => f.debug_tuple("Output").field(err).finish(),
        }
    }
}

impl<B: Bmc + 'static> StdError for Error<B> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidArguments => None,
            Self::InvalidAddress(_, err) => Some(err),
            Self::Client(err) => Some(err),
            Self::Idrac(err) => Some(err),
            Self::Output(err) => Some(err),
        }
    }
}
