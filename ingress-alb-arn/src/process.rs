use crate::error::CommandError;
use std::ffi::OsStr;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Runs `program` to completion and returns its stdout. A non-zero exit is an
/// error carrying whatever the program wrote to stderr.
pub async fn run_command<I, S>(
    program: &str,
    args: I,
    limit: Option<Duration>,
) -> Result<String, CommandError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    debug!(?command, "running");

    let child = command.spawn().map_err(|source| CommandError::Spawn {
        program: program.to_owned(),
        source,
    })?;

    let output = match limit {
        Some(limit) => timeout(limit, child.wait_with_output())
            .await
            .map_err(|_| CommandError::Timeout {
                program: program.to_owned(),
                timeout: limit,
            })?,
        None => child.wait_with_output().await,
    }
    .map_err(|source| CommandError::Spawn {
        program: program.to_owned(),
        source,
    })?;

    if !output.status.success() {
        return Err(CommandError::Failed {
            program: program.to_owned(),
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
