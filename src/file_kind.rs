// src/file_kind.rs
use std::fmt;

/// `st_mode` の種別ビットから得られるファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Regular,
    Directory,
    Fifo,
    Symlink,
    Socket,
    CharDevice,
    BlockDevice,
    Unknown,
}

const S_IFMT: u32 = libc::S_IFMT as u32;
const S_IFREG: u32 = libc::S_IFREG as u32;
const S_IFDIR: u32 = libc::S_IFDIR as u32;
const S_IFIFO: u32 = libc::S_IFIFO as u32;
const S_IFLNK: u32 = libc::S_IFLNK as u32;
const S_IFSOCK: u32 = libc::S_IFSOCK as u32;
const S_IFCHR: u32 = libc::S_IFCHR as u32;
const S_IFBLK: u32 = libc::S_IFBLK as u32;

impl FileKind {
    /// Classify a raw `st_mode` value. Permission bits are ignored.
    #[must_use]
    pub const fn from_mode(mode: u32) -> Self {
        match mode & S_IFMT {
            S_IFREG => Self::Regular,
            S_IFDIR => Self::Directory,
            S_IFIFO => Self::Fifo,
            S_IFLNK => Self::Symlink,
            S_IFSOCK => Self::Socket,
            S_IFCHR => Self::CharDevice,
            S_IFBLK => Self::BlockDevice,
            _ => Self::Unknown,
        }
    }

    /// Short column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Regular => "REG",
            Self::Directory => "DIR",
            Self::Fifo => "FIFO",
            Self::Symlink => "LINK",
            Self::Socket => "SOCK",
            Self::CharDevice => "C_DEV",
            Self::BlockDevice => "B_DEV",
            Self::Unknown => "----",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width/alignment flags from the table format apply
        f.pad(self.label())
    }
}
