// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Draining a child's output pipe into a capture buffer.

use std::io::Write;

use aifr_core::ExecMode;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};

/// Width of the command label in streamed output prefixes.
pub(crate) const LABEL_WIDTH: usize = 15;

/// How a single stream is drained.
pub(crate) enum Capture {
    /// Read everything silently.
    Buffered,
    /// Echo each line to stdout behind `prefix`, then record it.
    Streamed { prefix: String },
}

impl Capture {
    pub(crate) fn new(mode: ExecMode, command: &str) -> Self {
        match mode {
            ExecMode::Buffered => Capture::Buffered,
            ExecMode::Streamed => Capture::Streamed {
                prefix: stream_prefix(command),
            },
        }
    }

    /// Read `reader` to EOF, appending to `buf`.
    ///
    /// In streamed mode each recorded line ends with exactly one `\n`,
    /// including a final line that had none.
    pub(crate) async fn drain<R>(&self, reader: R, buf: &mut Vec<u8>) -> std::io::Result<()>
    where
        R: AsyncRead + Unpin,
    {
        match self {
            Capture::Buffered => {
                let mut reader = reader;
                reader.read_to_end(buf).await?;
            }
            Capture::Streamed { prefix } => {
                let mut reader = BufReader::new(reader);
                let mut line = Vec::new();
                loop {
                    line.clear();
                    if reader.read_until(b'\n', &mut line).await? == 0 {
                        break;
                    }
                    let text = String::from_utf8_lossy(trim_line_ending(&line));
                    emit_line(prefix, &text);
                    buf.extend_from_slice(text.as_bytes());
                    buf.push(b'\n');
                }
            }
        }
        Ok(())
    }
}

/// `[<label>]: ` where label is the command cut and padded to [`LABEL_WIDTH`].
pub(crate) fn stream_prefix(command: &str) -> String {
    let label: String = command.chars().take(LABEL_WIDTH).collect();
    format!("[{label:<width$}]: ", width = LABEL_WIDTH)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn emit_line(prefix: &str, text: &str) {
    let mut stdout = std::io::stdout().lock();
    // A closed stdout must not stop the capture.
    let _ = writeln!(stdout, "{prefix}{text}");
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
