//! Per-entry metadata snapshots
//!
//! Lookups use `lstat` semantics (`symlink_metadata`): the final symlink
//! component is never followed, so a link reports its own type and size.
//! Snapshots are taken lazily, per entry, and never cached across
//! directories.

use std::fs::{self, Metadata};
use std::io;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::SystemTime;

/// File type as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Socket,
    Fifo,
}

impl FileKind {
    fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_socket() {
            FileKind::Socket
        } else if ft.is_fifo() {
            FileKind::Fifo
        } else {
            FileKind::Regular
        }
    }

    /// The type letter shown in position 0 of a long-format row.
    pub fn type_letter(self) -> char {
        match self {
            FileKind::Regular => '-',
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::CharDevice => 'c',
            FileKind::BlockDevice => 'b',
            FileKind::Socket => 's',
            FileKind::Fifo => 'p',
        }
    }
}

/// Snapshot of one entry's metadata.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub kind: FileKind,
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileInfo {
    pub fn from_metadata(meta: &Metadata) -> Self {
        Self {
            kind: FileKind::from_file_type(meta.file_type()),
            mode: meta.mode(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.len(),
            modified: meta.modified().ok(),
        }
    }

    /// Any execute bit set for owner, group, or other.
    pub fn is_executable(&self) -> bool {
        self.mode & 0o111 != 0
    }
}

/// Look up metadata for `path` without following a final symlink.
pub fn stat(path: &Path) -> io::Result<FileInfo> {
    let meta = fs::symlink_metadata(path)?;
    Ok(FileInfo::from_metadata(&meta))
}

/// Resolve a numeric uid to a user name, or `unknown`.
pub fn owner_name(uid: u32) -> String {
    users::get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Resolve a numeric gid to a group name, or `unknown`.
pub fn group_name(gid: u32) -> String {
    users::get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}
