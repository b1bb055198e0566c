// src/entry.rs
use crate::file_kind::FileKind;
use std::ffi::OsString;
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

/// Per-entry status snapshot taken while listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryStatus {
    pub name: OsString,
    pub inode: u64,
    pub kind: FileKind,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    /// 最終更新時刻 (Unix 秒)
    pub modified: i64,
}

impl EntryStatus {
    pub fn from_metadata(name: OsString, meta: &Metadata) -> Self {
        Self {
            name,
            inode: meta.ino(),
            kind: FileKind::from_mode(meta.mode()),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.size(),
            modified: meta.mtime(),
        }
    }

    pub fn age_days(&self, now: i64) -> i64 {
        crate::filter::age_in_days(now, self.modified)
    }
}
