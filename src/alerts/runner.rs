//! External command invocation
//!
//! Every process spawned by the notifiers goes through [`CommandRunner`],
//! so tests can substitute a recorder.

use crate::error::NotifyError;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs local utilities such as `wall` and `mail`
pub trait CommandRunner: Send + Sync {
    /// Whether `program` can be found on this host
    fn is_available(&self, program: &str) -> bool;

    /// Run `program` to completion, feeding `stdin` when given
    ///
    /// A non-zero exit status is an error.
    fn run(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<(), NotifyError>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn is_available(&self, program: &str) -> bool {
        find_in_path(program)
    }

    fn run(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<(), NotifyError> {
        let spawn_err = |source| NotifyError::Spawn {
            program: program.to_string(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .spawn()
            .map_err(spawn_err)?;

        // The pipe is dropped at the end of this statement so the child sees EOF.
        let write_result = match (stdin, child.stdin.take()) {
            (Some(input), Some(mut pipe)) => pipe.write_all(input.as_bytes()),
            _ => Ok(()),
        };

        let status = child.wait().map_err(spawn_err)?;
        if status.success() {
            if let Err(e) = write_result {
                log::debug!("{} exited 0 before reading all input: {}", program, e);
            }
            return Ok(());
        }

        match write_result {
            Err(source) => Err(spawn_err(source)),
            Ok(()) => Err(NotifyError::CommandFailed {
                program: program.to_string(),
                status: status.to_string(),
            }),
        }
    }
}

/// Search `PATH` for an executable named `program`
fn find_in_path(program: &str) -> bool {
    if program.contains(std::path::MAIN_SEPARATOR) {
        return is_executable(Path::new(program));
    }

    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| is_executable(&dir.join(program))))
        .unwrap_or(false)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
