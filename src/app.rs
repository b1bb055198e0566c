// src/app.rs
use crate::config::Config;
use crate::error::Result;
use crate::{filesystem, presentation};
use std::io::Write;

/// List `config.dir` into `out` and return the number of rows printed.
///
/// The directory path is printed first, then the directory is opened; the
/// header only follows a successful open.
///
/// # Errors
/// Fails when the directory cannot be opened or `out` cannot be written.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    presentation::print_path(out, &config.dir)?;
    let listing = filesystem::open_dir(&config.dir)?;
    presentation::print_header(out)?;

    let mut rows = 0;
    for entry in listing.within(config.band, config.now.timestamp()) {
        presentation::print_row(out, &entry)?;
        rows += 1;
    }
    out.flush()?;

    log::debug!("listed {rows} entries from {}", config.dir.display());
    Ok(rows)
}
