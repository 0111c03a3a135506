//! Python interpreter handling
//!
//! This module runs inline scripts and decodes their JSON replies.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

use serde::de::DeserializeOwned;

use crate::config::PythonConfig;
use crate::error::{Error, Result};

/// A Python interpreter used to run the bridge scripts
#[derive(Debug, Clone)]
pub struct PythonRuntime {
    interpreter: String,
}

impl PythonRuntime {
    /// Create a runtime from configuration
    pub fn new(config: &PythonConfig) -> Self {
        Self {
            interpreter: config.interpreter.clone(),
        }
    }

    /// Interpreter command as configured
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Run `script` with `args`, optionally feeding `stdin`.
    ///
    /// The child's stderr is copied into `diagnostics` whether or not the
    /// script succeeds. A non-zero exit status is returned as part of the
    /// `Output`, not as an error; callers decide what a failure means.
    /// A script that exits without reading all of `stdin` is not an error
    /// either, its exit status says what went wrong.
    pub fn run(
        &self,
        script: &str,
        args: &[&OsStr],
        stdin: Option<&str>,
        diagnostics: &mut dyn Write,
    ) -> Result<Output> {
        let mut command = Command::new(&self.interpreter);
        command
            .arg("-c")
            .arg(script)
            .args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::trace!(interpreter = %self.interpreter, ?args, "Running python script");

        let mut child = command.spawn().map_err(|e| {
            Error::PythonError(format!("Failed to start '{}': {}", self.interpreter, e))
        })?;

        let pipe = child.stdin.take();
        let output = thread::scope(|scope| {
            // Fed from its own thread so a chatty child cannot block on a full
            // stderr pipe while we are still writing. Dropping the pipe closes
            // it so the script sees EOF.
            let feeder = stdin.zip(pipe).map(|(input, mut pipe)| {
                scope.spawn(move || pipe.write_all(input.as_bytes()))
            });

            let output = child.wait_with_output()?;

            if let Some(Ok(Err(e))) = feeder.map(|handle| handle.join()) {
                if e.kind() != io::ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }

            Ok::<_, io::Error>(output)
        })?;
        diagnostics.write_all(&output.stderr)?;
        diagnostics.flush()?;

        Ok(output)
    }
}

/// Decode the JSON a bridge script printed on stdout
pub fn decode_reply<T: DeserializeOwned>(stdout: &[u8]) -> Result<T> {
    serde_json::from_slice(stdout).map_err(|e| {
        Error::PythonError(format!(
            "Unexpected reply from python ({}): {}",
            e,
            String::from_utf8_lossy(stdout).trim()
        ))
    })
}

/// Human-readable reason for a failed script run
pub fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    // The last line of a traceback carries the exception
    let reason = stderr
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("no error output");
    format!("{} ({})", reason.trim(), output.status)
}
