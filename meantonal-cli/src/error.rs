use std::fmt::Display;

use crate::{CliError, CliResult};

pub trait ResultExt<T> {
    /// Turns any displayable error into a [`CliError::CommandError`] explaining what went wrong.
    fn or_explain(self, what_failed: &str) -> CliResult<T>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn or_explain(self, what_failed: &str) -> CliResult<T> {
        self.map_err(|err| CliError::CommandError(format!("{what_failed}: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_explained() {
        let result: Result<(), _> = Err("unexpected end of input");

        match result.or_explain("Could not read notes") {
            Err(CliError::CommandError(message)) => {
                assert_eq!(message, "Could not read notes: unexpected end of input")
            }
            other => panic!("Unexpected result {other:?}"),
        }
    }
}
