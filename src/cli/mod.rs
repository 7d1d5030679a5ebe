use anyhow::Result;

mod args;
mod exit_status;
mod prompt;
mod run;

pub use args::{AddCommand, Arguments, BuildCommand, Command};
pub use exit_status::ExitStatus;
pub use prompt::TerminalConfirm;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(command)
}
