// src/filesystem.rs
use crate::entry::EntryStatus;
use crate::error::{AppError, Result};
use crate::filter::AgeBand;
use std::ffi::OsString;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

/// `readdir(3)` reports these before anything else; `std::fs::read_dir` omits them.
const DOT_ENTRIES: [&str; 2] = [".", ".."];

/// An open directory yielding one [`EntryStatus`] per entry whose status
/// could be read.
///
/// Entries that vanish or cannot be stat'ed between the directory read and the
/// status lookup are skipped without error. The underlying handle is closed
/// when the listing is dropped.
#[derive(Debug)]
pub struct DirListing {
    dir: PathBuf,
    dots: std::array::IntoIter<&'static str, 2>,
    entries: ReadDir,
}

/// Open `dir` for listing.
///
/// # Errors
/// Returns [`AppError::OpenDir`] if the directory does not exist, is not a
/// directory, or cannot be read.
pub fn open_dir(dir: &Path) -> Result<DirListing> {
    let entries = fs::read_dir(dir).map_err(|source| AppError::OpenDir {
        path: dir.to_path_buf(),
        source,
    })?;

    Ok(DirListing {
        dir: dir.to_path_buf(),
        dots: DOT_ENTRIES.into_iter(),
        entries,
    })
}

impl DirListing {
    /// Keep only entries whose age (in days, relative to `now`) lies in `band`.
    pub fn within(self, band: AgeBand, now: i64) -> impl Iterator<Item = EntryStatus> {
        self.filter(move |entry| band.contains(entry.age_days(now)))
    }

    fn next_name(&mut self) -> Option<OsString> {
        if let Some(dot) = self.dots.next() {
            return Some(OsString::from(dot));
        }
        loop {
            match self.entries.next()? {
                Ok(entry) => return Some(entry.file_name()),
                Err(err) => log::debug!("skipping unreadable entry in {}: {err}", self.dir.display()),
            }
        }
    }

    fn stat(&self, name: OsString) -> Option<EntryStatus> {
        // dir always ends with a separator, so plain concatenation is a join
        let mut full = self.dir.clone().into_os_string();
        full.push(&name);

        match fs::metadata(&full) {
            Ok(meta) => Some(EntryStatus::from_metadata(name, &meta)),
            Err(err) => {
                log::debug!("skipping {}: {err}", Path::new(&full).display());
                None
            }
        }
    }
}

impl Iterator for DirListing {
    type Item = EntryStatus;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let name = self.next_name()?;
            if let Some(status) = self.stat(name) {
                return Some(status);
            }
        }
    }
}
