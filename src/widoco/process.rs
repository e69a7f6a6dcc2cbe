//! Child process execution with a timeout

use std::io::Read;
use std::process::{Command, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use wait_timeout::ChildExt;

use crate::error::{OntodocError, Result};

/// Read a child pipe to the end on its own thread so a chatty tool can't
/// block on a full pipe while we wait for it.
fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        buf
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

/// Run `command` to completion, killing it once `timeout` elapses.
///
/// Returns the captured output whatever the exit status; a timeout is
/// [`OntodocError::ToolTimedOut`].
pub fn run_with_timeout(mut command: Command, timeout: Duration) -> Result<Output> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command.spawn()?;
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    match child.wait_timeout(timeout)? {
        Some(status) => Ok(Output {
            status,
            stdout: collect(stdout),
            stderr: collect(stderr),
        }),
        None => {
            let _ = child.kill();
            let _ = child.wait();
            Err(OntodocError::ToolTimedOut {
                secs: timeout.as_secs_f64(),
            })
        }
    }
}
