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

//! Operation handlers. Results are written to `out`.

use crate::args::Operation;
use crate::Error;
use idrac_raid::Idrac;
use idrac_raid::PdState;
use idrac_raid::PollPolicy;
use idrac_raid::VolumeDetail;
use idrac_raid_core::Bmc;
use std::io::Write;
use std::ops::ControlFlow;

/// Run `operation` against `idrac`.
///
/// # Errors
///
/// Returns the error of the failed operation or of writing results.
pub async fn execute<B: Bmc>(
    idrac: &Idrac<B>,
    operation: Operation,
    policy: &PollPolicy,
    out: &mut impl Write,
) -> Result<(), Error<B>> {
    match operation {
        Operation::Controllers => controllers(idrac, out).await,
        Operation::Disks(controller) => disks(idrac, &controller, out).await,
        Operation::Volumes(controller) => volumes(idrac, &controller, out).await,
        Operation::ChangeState { disk, state } => {
            change_state(idrac, &disk, state, policy, out).await
        }
    }
}

async fn controllers<B: Bmc>(idrac: &Idrac<B>, out: &mut impl Write) -> Result<(), Error<B>> {
    let controllers = idrac.storage_controllers().await?;
    writeln!(out, "\n- Server controller(s) detected -\n")?;
    for controller in &controllers {
        writeln!(out, "{}", controller.id())?;
    }
    Ok(())
}

async fn disks<B: Bmc>(
    idrac: &Idrac<B>,
    controller: &str,
    out: &mut impl Write,
) -> Result<(), Error<B>> {
    let disks = idrac.storage_controller(controller).drives().await?;
    if disks.is_empty() {
        writeln!(out, "\n- INFO, no drives detected for {controller}")?;
        return Ok(());
    }
    writeln!(
        out,
        "\n- Drives detected for controller \"{controller}\" and RaidStatus\n"
    )?;
    for disk in &disks {
        writeln!(out, " - Disk: {}, Raidstatus: {}", disk.id, disk.raid_status)?;
    }
    Ok(())
}

async fn volumes<B: Bmc>(
    idrac: &Idrac<B>,
    controller: &str,
    out: &mut impl Write,
) -> Result<(), Error<B>> {
    let volumes = idrac.storage_controller(controller).volumes().await?;
    if volumes.is_empty() {
        writeln!(out, "\n- INFO, no volume(s) detected for {controller}")?;
        return Ok(());
    }
    writeln!(out, "\n- Volume(s) detected for {controller} controller -\n")?;
    for volume in &volumes {
        writeln!(out, "\n- Virtual Disk {} -\n", volume.id)?;
        for detail in &volume.details {
            match detail {
                VolumeDetail::Type { name, value } => writeln!(out, "{name}: {value}")?,
                VolumeDetail::Disk(disk) => writeln!(out, "Disk: {disk}")?,
            }
        }
    }
    Ok(())
}

async fn change_state<B: Bmc>(
    idrac: &Idrac<B>,
    disk: &str,
    state: PdState,
    policy: &PollPolicy,
    out: &mut impl Write,
) -> Result<(), Error<B>> {
    let monitor = idrac.raid_service().change_pd_state(disk, state).await?;
    writeln!(
        out,
        "- Job ID {} successfully created to change disk {disk} to {state}",
        monitor.job_id()
    )?;
    tracing::info!(job_id = %monitor.job_id(), disk, %state, "job created");

    let mut progress_error = None;
    let result = monitor
        .wait_with(policy, |job| {
            match writeln!(
                out,
                "- INFO, job status not completed, current status: \"{}\"",
                job.message
            ) {
                Ok(()) => ControlFlow::Continue(()),
                Err(err) => {
                    progress_error = Some(err);
                    ControlFlow::Break(())
                }
            }
        })
        .await;
    if let Some(err) = progress_error {
        return Err(Error::Output(err));
    }
    let job = result?;

    writeln!(out, "\n--- PASS, Final Detailed Job Status Results ---\n")?;
    for (name, value) in job.report() {
        writeln!(out, "{name}: {value}")?;
    }
    Ok(())
}

/// Write the failure line for `err`, followed by the details the
/// iDRAC returned with it.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn report_error<B: Bmc>(err: &Error<B>, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "\n- FAIL, {err}")?;
    let Error::Idrac(err) = err else {
        return Ok(());
    };
    for message in err.extended_info() {
        writeln!(out, "  {message}")?;
    }
    match err {
        idrac_raid::Error::ChangeStateRejected {
            body: Some(body), ..
        } => writeln!(out, "\n- POST command failure results:\n {body}"),
        idrac_raid::Error::JobStatusUnavailable {
            body: Some(body), ..
        } => writeln!(out, "Extended Info Message: {body}"),
        _ => Ok(()),
    }
}
