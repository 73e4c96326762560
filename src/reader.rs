//! JSON-lines input: one `ControllerEvent` per line.
//!
//! Blank lines are skipped. A malformed line, including one that is not
//! UTF-8, is logged and dropped; only an I/O failure ends the stream.

#[cfg(test)]
#[path = "reader_test.rs"]
mod reader_test;

use canvas::input::ControllerEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::error::HostError;
use crate::services::controller::ControllerHandle;

/// Decode one input line. `Ok(None)` for blank lines.
///
/// # Errors
///
/// Returns `Parse` when the line is not a valid event.
pub fn parse_line(line: &str) -> Result<Option<ControllerEvent>, HostError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(line)?))
}

/// Forward every event read from `reader` to the controller task until EOF.
/// Returns the number of events forwarded.
///
/// # Errors
///
/// Returns `Io` if reading fails and `ChannelClosed` if the controller task
/// exits first.
pub async fn pump<R>(mut reader: R, handle: &ControllerHandle) -> Result<usize, HostError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let mut forwarded = 0;
    let mut line_no = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        line_no += 1;
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = line_no, error = %e, "dropping non-utf8 line");
                continue;
            }
        };
        match parse_line(line) {
            Ok(Some(event)) => {
                handle.send(event).await?;
                forwarded += 1;
            }
            Ok(None) => {}
            Err(e) => warn!(line = line_no, error = %e, code = e.error_code(), "dropping malformed event"),
        }
    }
    Ok(forwarded)
}
