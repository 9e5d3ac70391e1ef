//! Line-at-a-time filter driving [`project`] over an input stream.
//!
//! Each input line flows through the projector and, if emitted, is written
//! before the next line is read. Output order always matches input order.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::CutError;
use crate::project::{Config, Projection, project};

/// Record counts for one or more filtered inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub records_read: usize,
    pub records_written: usize,
    pub records_suppressed: usize,
}

impl FilterStats {
    pub fn merge(&mut self, other: FilterStats) {
        self.records_read += other.records_read;
        self.records_written += other.records_written;
        self.records_suppressed += other.records_suppressed;
    }
}

/// Where input lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` names standard input; anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(arg.to_path_buf())
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, CutError> {
        match self {
            Input::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Input::File(path) => {
                let file = File::open(path).map_err(|source| CutError::Open {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "opened input");
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Filter every line of `reader` into `writer`.
///
/// Lines end at `\n`; a trailing `\r` is dropped as well. Bytes that are not
/// valid UTF-8 are decoded lossily (as U+FFFD) rather than failing the line.
/// Each emitted record is written followed by `\n` and flushed before the
/// next line is read. On a read error the writer is flushed before returning.
pub fn filter_lines<R, W>(
    mut reader: R,
    writer: &mut W,
    config: &Config,
) -> Result<FilterStats, CutError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = FilterStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                writer.flush().map_err(CutError::Write)?;
                return Err(CutError::Read(e));
            }
        }
        stats.records_read += 1;

        let line = String::from_utf8_lossy(trim_line_end(&buf));
        match project(&line, config) {
            Projection::Emit(out) => {
                trace!(record = stats.records_read, "emit");
                writer.write_all(out.as_bytes()).map_err(CutError::Write)?;
                writer.write_all(b"\n").map_err(CutError::Write)?;
                writer.flush().map_err(CutError::Write)?;
                stats.records_written += 1;
            }
            Projection::Suppressed => {
                trace!(record = stats.records_read, "suppressed: no delimiter");
                stats.records_suppressed += 1;
            }
        }
    }

    writer.flush().map_err(CutError::Write)?;
    Ok(stats)
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
