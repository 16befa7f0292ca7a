//! Depth-first traversal: render one directory fully, then descend

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use termcolor::WriteColor;

use crate::entries;
use crate::info::{self, FileKind};
use crate::output::{self, DisplayMode, OutputConfig};

/// Walks directories depth-first, rendering each listing before descending.
///
/// Execution is single-threaded and synchronous; each recursion level owns
/// its own batch, and a directory's listing is flushed in full before any
/// subdirectory is entered.
pub struct Walker {
    config: OutputConfig,
    recursive: bool,
}

impl Walker {
    pub fn new(config: OutputConfig, recursive: bool) -> Self {
        Self { config, recursive }
    }

    /// List every path in `paths`, or the current directory when none given.
    ///
    /// Explicit paths each get a `path:` header, with a blank line between
    /// consecutive paths. Per-path failures are diagnostics, not errors:
    /// the returned `Err` covers output-stream failures only.
    pub fn run<W: WriteColor>(&self, paths: &[PathBuf], out: &mut W) -> io::Result<()> {
        if paths.is_empty() {
            return self.list_dir(Path::new("."), out);
        }
        for (i, path) in paths.iter().enumerate() {
            writeln!(out, "{}:", path.display())?;
            self.list_dir(path, out)?;
            if i + 1 < paths.len() {
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// List one directory and, when recursing, its subdirectories.
    fn list_dir<W: WriteColor>(&self, dir: &Path, out: &mut W) -> io::Result<()> {
        let batch = match entries::collect(dir) {
            Ok(batch) => batch,
            Err(e) => {
                eprintln!("zest: cannot open directory '{}': {}", dir.display(), e);
                return Ok(());
            }
        };
        if let Some(e) = &batch.read_error {
            eprintln!("zest: reading '{}': {}", dir.display(), e);
        }

        match self.config.mode {
            DisplayMode::Long => {
                for entry in &batch.entries {
                    match output::render_long(entry) {
                        Ok(row) => writeln!(out, "{row}")?,
                        Err(e) => {
                            eprintln!("zest: cannot stat '{}': {}", entry.path().display(), e);
                        }
                    }
                }
            }
            DisplayMode::Across => output::render_across(out, &batch, &self.config)?,
            DisplayMode::Columns => output::render_columns(out, &batch, &self.config)?,
        }

        if self.recursive {
            for entry in &batch.entries {
                let path = entry.path();
                // lstat: a symlink to a directory reports as a link and is
                // never descended, so upward-pointing links cannot loop us.
                let Ok(info) = info::stat(&path) else {
                    continue;
                };
                if info.kind == FileKind::Directory {
                    writeln!(out)?;
                    writeln!(out, "{}:", path.display())?;
                    self.list_dir(&path, out)?;
                }
            }
        }
        Ok(())
    }
}
