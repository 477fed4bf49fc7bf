//! Handing the terminal over to a follow-up command.

use std::process::{ExitStatus, Stdio};

use envswitch_core::{Command, SwitchError};

/// Split a command string into a program and its arguments.
///
/// Splitting happens on raw whitespace: quotes and escapes are not
/// interpreted, so an argument can never contain a space.
pub fn split_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Exit code a host should report for a finished child.
///
/// A child terminated by a signal maps to `128 + signal`, the convention
/// shells use, so the failure is not reported as success.
pub fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    0
}

/// Run a command attached to the host's standard streams and wait for it.
///
/// Succeeds only when the child exits with status 0.
pub fn execute(command: &Command) -> Result<(), SwitchError> {
    let (program, args) = split_command(&command.command).ok_or(SwitchError::EmptyCommand)?;

    tracing::info!(name = %command.name, command = %command.command, "launching command");

    let status = std::process::Command::new(program)
        .args(&args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| SwitchError::Spawn {
            command: command.command.clone(),
            source,
        })?;

    let code = status_code(status);
    tracing::info!(command = %command.command, code, "command finished");

    if code == 0 {
        Ok(())
    } else {
        Err(SwitchError::ChildExit {
            command: command.command.clone(),
            code,
        })
    }
}
