use std::{env, io::ErrorKind};

use meantonal_cli::{CliError, CliResult};

fn main() -> CliResult {
    env_logger::init();

    match meantonal_cli::run_in_shell_env(env::args()) {
        // Happens when the reading end of a pipe, e.g. `head`, exits early.
        Err(CliError::IoError(err)) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
