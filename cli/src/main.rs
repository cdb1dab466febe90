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

//! `change-pd-state`: set an iDRAC physical disk offline or online.

mod args;
mod cmds;
mod error;
mod logging;

use crate::args::Args;
use crate::error::Error;
use crate::logging::LogConfig;
use idrac_raid::Idrac;
use idrac_raid_bmc_http::reqwest::BmcError;
use idrac_raid_bmc_http::reqwest::Client;
use idrac_raid_bmc_http::reqwest::ClientParams;
use idrac_raid_bmc_http::HttpBmc;
use idrac_raid_core::BmcCredentials;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

type IdracBmc = HttpBmc<Client>;

async fn run(args: &Args, out: &mut impl Write) -> Result<(), Error<IdracBmc>> {
    let operation = args.operation().ok_or(Error::InvalidArguments)?;
    let endpoint = Url::parse(&format!("https://{}", args.ip))
        .map_err(|err| Error::InvalidAddress(args.ip.clone(), err))?;
    let params = ClientParams::new()
        .accept_invalid_certs(true)
        .timeout(Duration::from_secs(args.request_timeout));
    let client = Client::with_params(params).map_err(|err| Error::Client(BmcError::from(err)))?;
    let credentials = BmcCredentials::new(args.username.clone(), args.password.clone());
    tracing::debug!(%endpoint, username = %credentials.username, "connecting");
    let bmc = Arc::new(HttpBmc::new(client, endpoint, credentials));

    let idrac = Idrac::new(bmc).await?;
    cmds::execute(&idrac, operation, &args.poll_policy(), out).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse_legacy();
    logging::init(LogConfig {
        json: args.log_json,
        verbose: args.verbose,
    });

    let mut stdout = std::io::stdout();
    match run(&args, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "change-pd-state failed");
            if let Err(err) = cmds::report_error(&err, &mut stdout) {
                tracing::error!(error = %err, "failed to write error report");
            }
            ExitCode::FAILURE
        }
    }
}
