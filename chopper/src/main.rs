mod channel;
mod cli;
mod context;
mod device;
mod error;
mod logging;
mod shutdown;

// STD LIB
use std::process::ExitCode;

// THIRD PARTY CRATES
use clap::{CommandFactory, Parser};
use tracing::{error, info};

// LOCAL CRATES
use crate::context::HopContext;
use crate::error::Error;
use crate::shutdown::{arm_interrupt, arm_timeout, stop_channel, StopReason};
use crate::{cli::Cli, logging::init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Parse command line arguments; --help and --version exit here.
    let args = Cli::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("ERROR: cannot initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    // SIGINT is honored from here on, even during setup.
    let (stop_handle, stop) = stop_channel();
    arm_interrupt(stop_handle.clone());

    let ctx = match HopContext::new(&args) {
        Ok(ctx) => ctx,
        Err(Error::MissingInterface) => {
            eprintln!("{}", Cli::command().render_help());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(timeout) = ctx.timing.timeout {
        arm_timeout(stop_handle, timeout);
    }

    let (radio, iface) = match device::open(&ctx.interface) {
        Ok(opened) => opened,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match device::start(radio, iface, ctx, stop).await {
        Ok(report) => {
            let reason = report.stop_reason.unwrap_or(StopReason::Interrupted);
            info!(
                "Stopped ({}) after {} hops, {} full cycles",
                reason, report.hops, report.cycles
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
