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

use clap::ArgGroup;
use clap::Parser;
use idrac_raid::PdState;
use idrac_raid::PollPolicy;
use std::ffi::OsString;
use std::str::FromStr;
use std::time::Duration;

const EXAMPLES: &str = "\
Examples:
  change-pd-state -ip 192.168.0.120 -u root -p calvin -c
      Get storage controller FQDDs.
  change-pd-state -ip 192.168.0.120 -u root -p calvin -d RAID.Mezzanine.1-1
      Get all disks behind this storage controller and their current RAID status.
  change-pd-state -ip 192.168.0.120 -u root -p calvin -v RAID.Integrated.1-1
      Get virtual disks of this storage controller and their type.
  change-pd-state -ip 192.168.0.120 -u root -p calvin \\
      -pd Disk.Bay.10:Enclosure.Internal.0-1:RAID.Mezzanine.1-1 -o offline
      Set disk in bay 10 to offline.

Disks of a RAID 0 virtual disk are not supported.";

/// Change the state of a disk that is part of a virtual disk using the
/// Redfish API with Dell OEM extension: set it offline or bring it back
/// online.
#[derive(Parser, Debug)]
#[command(name = "change-pd-state", version, after_help = EXAMPLES)]
#[command(group(
    ArgGroup::new("operation")
        .required(true)
        .args(["controllers", "disks", "volumes", "pd"])
))]
pub struct Args {
    /// iDRAC IP address (also accepted as -ip).
    #[arg(long = "ip", env = "IDRAC_IP", value_name = "ADDR")]
    pub ip: String,

    /// iDRAC username.
    #[arg(short = 'u', env = "IDRAC_USERNAME", value_name = "USER")]
    pub username: String,

    /// iDRAC password.
    #[arg(
        short = 'p',
        env = "IDRAC_PASSWORD",
        hide_env_values = true,
        value_name = "PASSWORD"
    )]
    pub password: String,

    /// Get server storage controller FQDDs.
    #[arg(short = 'c', num_args = 0..=1, default_missing_value = "y", value_name = "y")]
    pub controllers: Option<String>,

    /// Get disk FQDDs and RAID status of a storage controller,
    /// e.g. RAID.Integrated.1-1.
    #[arg(short = 'd', value_name = "CONTROLLER")]
    pub disks: Option<String>,

    /// Get virtual disks of a storage controller and their type,
    /// e.g. RAID.Integrated.1-1.
    #[arg(short = 'v', value_name = "CONTROLLER")]
    pub volumes: Option<String>,

    /// Disk FQDD to set offline or online, e.g.
    /// Disk.Bay.4:Enclosure.Internal.0-1:RAID.Slot.6-1 (also accepted as -pd).
    #[arg(long = "pd", value_name = "DISK", requires = "state")]
    pub pd: Option<String>,

    /// Target disk state.
    #[arg(
        short = 'o',
        value_name = "offline|online",
        value_parser = PdState::from_str,
        requires = "pd"
    )]
    pub state: Option<PdState>,

    /// Seconds between job status checks.
    #[arg(long, default_value_t = 3, value_name = "SECS")]
    pub poll_interval: u64,

    /// Seconds to wait for the job before giving up.
    #[arg(long, default_value_t = 7200, value_name = "SECS")]
    pub job_timeout: u64,

    /// Timeout of a single HTTP request in seconds.
    #[arg(long, default_value_t = 120, value_name = "SECS")]
    pub request_timeout: u64,

    /// Enable debug logging.
    #[arg(long)]
    pub verbose: bool,

    /// Write logs as JSON.
    #[arg(long)]
    pub log_json: bool,
}

/// Operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Controllers,
    Disks(String),
    Volumes(String),
    ChangeState { disk: String, state: PdState },
}

impl Args {
    /// Parse process arguments, accepting legacy `-ip` and `-pd`.
    pub fn parse_legacy() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        match (
            &self.controllers,
            &self.disks,
            &self.volumes,
            &self.pd,
            self.state,
        ) {
            (Some(_), None, None, None, _) => Some(Operation::Controllers),
            (None, Some(controller), None, None, _) => Some(Operation::Disks(controller.clone())),
            (None, None, Some(controller), None, _) => {
                Some(Operation::Volumes(controller.clone()))
            }
            (None, None, None, Some(disk), Some(state)) => Some(Operation::ChangeState {
                disk: disk.clone(),
                state,
            }),
            _ => None,
        }
    }

    #[must_use]
    pub const fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_secs(self.poll_interval),
            timeout: Duration::from_secs(self.job_timeout),
        }
    }
}

/// Rewrite the single-dash multi-letter flags `-ip` and `-pd` to their
/// long form. Arguments after `--` are left alone.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut options_ended = false;
    args.into_iter()
        .map(|arg| {
            if options_ended {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    options_ended = true;
                    arg
                }
                Some(s) if s == "-ip" || s == "-pd" || s.starts_with("-ip=") || s.starts_with("-pd=") => {
                    OsString::from(format!("-{s}"))
                }
                _ => arg,
            }
        })
        .collect()
}
