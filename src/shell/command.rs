//! External program execution.

use crate::error::{BootError, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Capture stdout (if false, forwarded to the parent's stderr).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Render a program and its arguments as a single display string.
pub fn display_command<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> String {
    let mut parts = vec![program.to_string_lossy().into_owned()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run a program directly (no shell) and wait for it to exit.
///
/// A non-zero exit is returned as a failed [`CommandResult`]; only a failure
/// to start the process is an error. Uncaptured child stdout is written to
/// our stderr, keeping our stdout for program output.
pub fn execute<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let start = Instant::now();
    let shown = display_command(program, args);
    tracing::debug!("Executing: {}", shown);

    let mut cmd = Command::new(program);
    cmd.args(args);

    cmd.stdin(Stdio::inherit());

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::from(std::io::stderr()));
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|e| BootError::CommandSpawnFailed {
        command: shown.clone(),
        message: e.to_string(),
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        shown,
        output.status.code(),
        duration
    );

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Run a program with stdout and stderr captured.
///
/// Programs run in the current directory of this process, so relative
/// paths in `program` and `args` mean the same thing they do to the caller.
pub fn execute_quiet<S: AsRef<OsStr>>(program: &Path, args: &[S]) -> Result<CommandResult> {
    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
    };
    execute(program, args, &options)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh() -> &'static Path {
        Path::new("/bin/sh")
    }

    #[test]
    fn execute_successful_command() {
        let result = execute_quiet(sh(), &["-c", "echo hello"]).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute_quiet(sh(), &["-c", "exit 3"]).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_passes_arguments_verbatim() {
        let result = execute_quiet(sh(), &["-c", "echo \"$1\"", "sh", "a b;c"]).unwrap();

        assert_eq!(result.stdout.trim(), "a b;c");
    }

    #[test]
    fn execute_runs_in_caller_directory() {
        let result = execute_quiet(sh(), &["-c", "pwd"]).unwrap();

        let reported = std::fs::canonicalize(result.stdout.trim()).unwrap();
        let here = std::fs::canonicalize(std::env::current_dir().unwrap()).unwrap();
        assert_eq!(reported, here);
    }

    #[test]
    fn execute_missing_program_is_spawn_error() {
        let result = execute_quiet(Path::new("/definitely/not/a/program"), &["x"]);

        match result {
            Err(BootError::CommandSpawnFailed { command, .. }) => {
                assert!(command.starts_with("/definitely/not/a/program"));
            }
            other => panic!("expected spawn failure, got {:?}", other),
        }
    }

    #[test]
    fn display_command_joins_parts() {
        let shown = display_command(Path::new("python3"), &["-m", "venv", ".venv"]);
        assert_eq!(shown, "python3 -m venv .venv");
    }
}
