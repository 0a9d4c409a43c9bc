//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod audit;
pub mod compliance;
pub mod config_cmd;
pub mod patients;
pub mod seed;
pub mod sites;
pub mod staff;
pub mod stats;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::context::AppContext;
use crate::error::CliError;

/// Dispatch a store-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, ctx: &AppContext, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Sites(args) => sites::handle(ctx, args, global),
        Command::Patients(args) => patients::handle(ctx, args, global),
        Command::Staff(args) => staff::handle(ctx, args, global),
        Command::Audit(args) => audit::handle(ctx, args, global),
        Command::Compliance(args) => compliance::handle(ctx, args, global),
        Command::Stats => stats::handle(ctx, global),
        Command::Seed(args) => seed::handle(ctx, args, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
