// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::filter::AgeBand;
use chrono::{DateTime, Local};
use derive_builder::Builder;
use std::ffi::OsString;
use std::io;
use std::path::{MAIN_SEPARATOR_STR, PathBuf};

/// Fully resolved invocation settings.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// 対象ディレクトリ（常に末尾がパス区切り）
    #[builder(setter(custom))]
    pub dir: PathBuf,
    #[builder(default)]
    pub band: AgeBand,
    /// Reference instant every entry is aged against.
    #[builder(default = "Local::now()")]
    pub now: DateTime<Local>,
}

impl ConfigBuilder {
    /// Set the target directory, normalising it to end with a separator.
    pub fn dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.dir = Some(with_trailing_separator(dir.into()));
        self
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let dir = resolve_dir(args.directory().cloned(), std::env::current_dir)?;
        let band = AgeBand::from_flags(args.max_age, args.min_age);

        log::debug!("resolved directory {}, band {band:?}", dir.display());

        Ok(ConfigBuilder::default()
            .dir(dir)
            .band(band)
            .build()
            .expect("dir is always set above"))
    }
}

/// Use the given operand, or `current_dir()` when absent or empty.
fn resolve_dir<F>(operand: Option<OsString>, current_dir: F) -> Result<PathBuf>
where
    F: FnOnce() -> io::Result<PathBuf>,
{
    match operand {
        Some(path) if !path.is_empty() => Ok(PathBuf::from(path)),
        _ => current_dir().map_err(AppError::CurrentDir),
    }
}

/// Append a path separator unless the path already ends with one.
pub fn with_trailing_separator(path: PathBuf) -> PathBuf {
    if path.as_os_str().as_encoded_bytes().ends_with(MAIN_SEPARATOR_STR.as_bytes()) {
        return path;
    }
    let mut raw = path.into_os_string();
    raw.push(MAIN_SEPARATOR_STR);
    PathBuf::from(raw)
}
