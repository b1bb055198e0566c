// src/args.rs
use crate::error::{AppError, Result};
use crate::parsers;
use clap::error::ErrorKind;
use clap::{Parser, ValueHint};
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "lsdir",
    version,
    args_override_self = true,
    about = "ディレクトリ内のエントリを inode/種別/UID/GID/サイズ/更新日時つきで一覧表示"
)]
pub struct Args {
    /// 最大経過日数: これより古いエントリを除外
    #[arg(short = 's', value_name = "DAYS", allow_hyphen_values = true, value_parser = parsers::parse_days)]
    pub max_age: Option<i64>,

    /// 最小経過日数: これより新しいエントリを除外
    #[arg(short = 'b', value_name = "DAYS", allow_hyphen_values = true, value_parser = parsers::parse_days)]
    pub min_age: Option<i64>,

    /// 対象ディレクトリ（省略時はカレントディレクトリ）
    #[arg(value_hint = ValueHint::DirPath)]
    pub paths: Vec<OsString>,
}

impl Args {
    /// The directory operand: the last positional argument, if any.
    pub fn directory(&self) -> Option<&OsString> {
        self.paths.last()
    }
}

/// Parse a full argument vector (program name first).
///
/// Returns `Ok(None)` when clap has already printed help or version text.
///
/// # Errors
/// Any rejected flag or missing flag value becomes [`AppError::InvalidArgument`].
pub fn try_parse_args<I, T>(argv: I) -> Result<Option<Args>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(argv) {
        Ok(args) => Ok(Some(args)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(None)
        }
        Err(err) => {
            log::debug!("argument parsing failed: {err}");
            Err(AppError::InvalidArgument(err.kind().to_string()))
        }
    }
}
