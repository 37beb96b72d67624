//! External process invocation.
//!
//! Compression is delegated to a separate program. Commands are always
//! spawned with an explicit argument vector, never through a shell, and
//! only the exit code is observed.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::future::Future;

use crate::error::{PdfToolError, Result};

/// A program plus its argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: OsString,
    args: Vec<OsString>,
}

impl ExternalCommand {
    /// Create a command with no arguments.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Program to execute.
    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Arguments in order.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Substitute `(placeholder, value)` pairs inside a single argument.
    ///
    /// Placeholders are replaced left to right; substituted values are
    /// never scanned again, so a path containing `{input}` stays literal.
    pub fn expand(arg: &str, vars: &[(&str, &OsStr)]) -> OsString {
        let mut expanded = OsString::with_capacity(arg.len());
        let mut rest = arg;

        loop {
            let next = vars
                .iter()
                .filter(|(name, _)| !name.is_empty())
                .filter_map(|(name, value)| rest.find(name).map(|idx| (idx, *name, *value)))
                .min_by_key(|(idx, _, _)| *idx);

            match next {
                Some((idx, name, value)) => {
                    expanded.push(&rest[..idx]);
                    expanded.push(value);
                    rest = &rest[idx + name.len()..];
                }
                None => {
                    expanded.push(rest);
                    break;
                }
            }
        }

        expanded
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Runs external commands and reports their exit code.
///
/// `Ok(Some(code))` is a normal exit, `Ok(None)` a termination by signal.
/// An `Err` means the program could not be started at all.
pub trait ProcessRunner {
    /// Run `command` to completion.
    fn run(&self, command: &ExternalCommand) -> impl Future<Output = Result<Option<i32>>>;
}

/// Runs commands as child processes of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(&self, command: &ExternalCommand) -> Result<Option<i32>> {
        let status = tokio::process::Command::new(command.program())
            .args(command.args())
            .status()
            .await
            .map_err(|source| PdfToolError::ExternalToolUnavailable {
                program: command.program().to_string_lossy().into_owned(),
                source,
            })?;

        Ok(status.code())
    }
}
