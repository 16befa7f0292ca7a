//! Long-format rows: type, permissions, ownership, size, timestamp

use std::io;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::entries::Entry;
use crate::info::{self, FileInfo};

/// Build the 10-character type and permission field.
///
/// Position 0 is the type letter, positions 1-9 are `rwxrwxrwx` with `-`
/// for unset bits. Setuid, setgid, and sticky are not represented.
pub fn mode_string(info: &FileInfo) -> String {
    let mut s = String::with_capacity(10);
    s.push(info.kind.type_letter());
    for shift in [6u32, 3, 0] {
        let bits = info.mode >> shift;
        s.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        s.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        s.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    s
}

/// Format a modification time like `Sep 30 14:21:05 2025`.
///
/// Month abbreviations come from chrono's fixed English table, so the
/// output is locale-independent. The day of month is space-padded, matching
/// the `ctime` layout with the weekday dropped.
pub fn format_mtime(t: SystemTime) -> String {
    DateTime::<Local>::from(t)
        .format("%b %e %H:%M:%S %Y")
        .to_string()
}

/// Assemble one row from an already-resolved snapshot.
pub fn format_row(info: &FileInfo, owner: &str, group: &str, name: &str) -> String {
    let mtime = info
        .modified
        .map(format_mtime)
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {:>3}  {:<8}  {:<8}  {:>8}  {}  {}",
        mode_string(info),
        info.nlink,
        owner,
        group,
        info.size,
        mtime,
        name,
    )
}

/// Render the long-format row for one entry.
///
/// Metadata is looked up with `lstat` semantics, so a symlink reports type
/// `l` and its own size. Owner and group lookups that fail fall back to the
/// literal `unknown` inside `format_row`'s inputs.
pub fn render_long(entry: &Entry) -> io::Result<String> {
    let info = info::stat(&entry.path())?;
    let owner = info::owner_name(info.uid);
    let group = info::group_name(info.gid);
    Ok(format_row(&info, &owner, &group, &entry.name))
}
