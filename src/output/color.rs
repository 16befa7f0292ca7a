//! File-type color classification for grid output

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::entries::Entry;
use crate::info::{self, FileInfo, FileKind};

/// Suffixes painted as archives when nothing else matches.
const ARCHIVE_SUFFIXES: [&str; 4] = [".tar", ".tgz", ".zip", ".gz"];

/// Visual class of a name.
///
/// The classification priority is fixed and deliberate: symlink, then
/// directory, then special file, then executable, then archive suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameClass {
    Symlink,
    Directory,
    Special,
    Executable,
    Archive,
    Plain,
}

impl NameClass {
    /// The color spec this class paints with, or `None` for unpainted.
    ///
    /// Special files are shown black-on-white; termcolor has no reverse
    /// video attribute.
    pub fn spec(self) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match self {
            NameClass::Symlink => spec.set_fg(Some(Color::Magenta)),
            NameClass::Directory => spec.set_fg(Some(Color::Blue)),
            NameClass::Special => spec.set_fg(Some(Color::Black)).set_bg(Some(Color::White)),
            NameClass::Executable => spec.set_fg(Some(Color::Green)),
            NameClass::Archive => spec.set_fg(Some(Color::Red)),
            NameClass::Plain => return None,
        };
        Some(spec)
    }
}

/// Classify `name` by its metadata snapshot.
pub fn classify(name: &str, info: &FileInfo) -> NameClass {
    match info.kind {
        FileKind::Symlink => NameClass::Symlink,
        FileKind::Directory => NameClass::Directory,
        FileKind::CharDevice | FileKind::BlockDevice | FileKind::Socket | FileKind::Fifo => {
            NameClass::Special
        }
        FileKind::Regular if info.is_executable() => NameClass::Executable,
        FileKind::Regular if has_archive_suffix(name) => NameClass::Archive,
        FileKind::Regular => NameClass::Plain,
    }
}

fn has_archive_suffix(name: &str) -> bool {
    ARCHIVE_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// Write `entry`'s name padded to `width` characters, painted by file type
/// when color is enabled.
///
/// Metadata is looked up only when color is enabled, and a failed lookup
/// (broken link target, racing deletion) degrades to plain padded output.
/// Padding is written after the color reset so separators stay unpainted.
pub fn write_name<W: WriteColor>(
    out: &mut W,
    entry: &Entry,
    width: usize,
    use_color: bool,
) -> io::Result<()> {
    let pad = width.saturating_sub(entry.name.chars().count());
    if use_color {
        if let Ok(info) = info::stat(&entry.path()) {
            if let Some(spec) = classify(&entry.name, &info).spec() {
                out.set_color(&spec)?;
                write!(out, "{}", entry.name)?;
                out.reset()?;
                return write!(out, "{:pad$}", "");
            }
        }
    }
    write!(out, "{}{:pad$}", entry.name, "")
}
