// src/presentation.rs
use crate::entry::EntryStatus;
use chrono::{Local, TimeZone};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// `ctime(3)` style, e.g. `Thu Oct 19 02:34:00 2026`.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

const NAME_WIDTH: usize = 40;
/// Applied to the timestamp *including* its trailing newline, as `%27s` does
/// with `ctime(3)` output.
const MTIME_WIDTH: usize = 27;

pub fn print_path<W: Write>(out: &mut W, dir: &Path) -> io::Result<()> {
    out.write_all(dir.as_os_str().as_bytes())?;
    out.write_all(b"\n")
}

pub fn print_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:<10}{:>5}{:>6}{:>6}{:>10}{:>40}{:>27}",
        "inode", "Type", "UID", "GID", "SIZE", "Filename", "Last Modified"
    )
}

pub fn print_row<W: Write>(out: &mut W, entry: &EntryStatus) -> io::Result<()> {
    write!(
        out,
        "{:<10}{:>5}{:>6}{:>6}{:>10}",
        entry.inode, entry.kind, entry.uid, entry.gid, entry.size
    )?;
    write_right_aligned(out, entry.name.as_bytes(), NAME_WIDTH)?;
    let mtime = format!("{}\n", format_mtime(entry.modified));
    write_right_aligned(out, mtime.as_bytes(), MTIME_WIDTH)
}

/// Right-align raw bytes in `width` columns, counting bytes like `printf`.
fn write_right_aligned<W: Write>(out: &mut W, bytes: &[u8], width: usize) -> io::Result<()> {
    let pad = width.saturating_sub(bytes.len());
    write!(out, "{:pad$}", "")?;
    out.write_all(bytes)
}

/// Render Unix seconds in local time, falling back to the raw number when the
/// value is outside chrono's range.
pub fn format_mtime(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map_or_else(|| secs.to_string(), |dt| dt.format(CTIME_FORMAT).to_string())
}
