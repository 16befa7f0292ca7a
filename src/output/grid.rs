//! Column layout for the grid display modes

use std::io::{self, Write};

use termcolor::WriteColor;

use crate::entries::ListingBatch;

use super::OutputConfig;
use super::color::write_name;

/// Spaces separating adjacent columns.
const COLUMN_GAP: usize = 2;

/// Grid geometry derived from a batch's widest name and the display width.
///
/// Purely derived; nothing here touches the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub column_width: usize,
    pub columns: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Compute a down-then-across layout for `count` names.
    ///
    /// At least one column is always used, even when the widest name does
    /// not fit the display width.
    pub fn down_then_across(count: usize, max_name_width: usize, display_width: usize) -> Self {
        let column_width = max_name_width + COLUMN_GAP;
        let columns = (display_width / column_width).max(1);
        let rows = count.div_ceil(columns);
        Self {
            column_width,
            columns,
            rows,
        }
    }

    /// Sorted index of the cell at (`row`, `col`), if occupied.
    ///
    /// Index `i` lives at row `i % rows`, column `i / rows`: the first
    /// column fills top to bottom before the second column starts.
    pub fn index_at(&self, row: usize, col: usize, count: usize) -> Option<usize> {
        let index = col * self.rows + row;
        (index < count).then_some(index)
    }
}

/// Render the batch down-then-across: rows outer, columns inner.
///
/// An empty batch produces no output, not even a blank line.
pub fn render_columns<W: WriteColor>(
    out: &mut W,
    batch: &ListingBatch,
    config: &OutputConfig,
) -> io::Result<()> {
    if batch.is_empty() {
        return Ok(());
    }
    let layout = GridLayout::down_then_across(batch.len(), batch.max_name_width, config.width);
    for row in 0..layout.rows {
        for col in 0..layout.columns {
            if let Some(i) = layout.index_at(row, col, batch.len()) {
                write_name(out, &batch.entries[i], layout.column_width, config.use_color)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the batch left to right, breaking a line whenever the next padded
/// name would run past the display width.
///
/// This produces ragged columns driven purely by running width; no break is
/// emitted before the first name of a line.
pub fn render_across<W: WriteColor>(
    out: &mut W,
    batch: &ListingBatch,
    config: &OutputConfig,
) -> io::Result<()> {
    if batch.is_empty() {
        return Ok(());
    }
    let column_width = batch.max_name_width + COLUMN_GAP;
    let mut current_width = 0;
    for entry in &batch.entries {
        if current_width > 0 && current_width + column_width > config.width {
            writeln!(out)?;
            current_width = 0;
        }
        write_name(out, entry, column_width, config.use_color)?;
        current_width += column_width;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::Buffer;

    use crate::entries::Entry;
    use crate::output::DisplayMode;

    use super::*;

    fn batch(names: &[&str]) -> ListingBatch {
        let max_name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        ListingBatch {
            entries: names
                .iter()
                .map(|n| Entry {
                    name: n.to_string(),
                    parent: PathBuf::from("."),
                })
                .collect(),
            max_name_width,
            read_error: None,
        }
    }

    fn config(mode: DisplayMode, width: usize) -> OutputConfig {
        OutputConfig {
            mode,
            use_color: false,
            width,
        }
    }

    fn render_to_string(
        f: impl Fn(&mut Buffer, &ListingBatch, &OutputConfig) -> io::Result<()>,
        batch: &ListingBatch,
        config: &OutputConfig,
    ) -> String {
        let mut buf = Buffer::no_color();
        f(&mut buf, batch, config).unwrap();
        String::from_utf8(buf.into_inner()).unwrap()
    }

    #[test]
    fn test_layout_geometry() {
        // 7 names, widest 4 chars, width 20: 6-wide columns, 3 across, 3 rows.
        let layout = GridLayout::down_then_across(7, 4, 20);
        assert_eq!(layout.column_width, 6);
        assert_eq!(layout.columns, 3);
        assert_eq!(layout.rows, 3);
    }

    #[test]
    fn test_layout_at_least_one_column() {
        let layout = GridLayout::down_then_across(3, 30, 10);
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.rows, 3);
    }

    #[test]
    fn test_placement_law() {
        // Index i appears at (i % rows, i / rows) for every i.
        for (count, maxlen, width) in [(7, 4, 20), (12, 3, 31), (1, 1, 80), (9, 8, 25)] {
            let layout = GridLayout::down_then_across(count, maxlen, width);
            for i in 0..count {
                let (row, col) = (i % layout.rows, i / layout.rows);
                assert_eq!(layout.index_at(row, col, count), Some(i));
            }
        }
    }

    #[test]
    fn test_columns_fill_down_then_across() {
        // Five 1-char names at width 6: 3-wide columns, 2 across, 3 rows.
        // Column one holds a b c, column two holds d e.
        let b = batch(&["a", "b", "c", "d", "e"]);
        let out = render_to_string(render_columns, &b, &config(DisplayMode::Columns, 6));
        let lines: Vec<_> = out.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["a  d", "b  e", "c"]);
    }

    #[test]
    fn test_columns_empty_batch_renders_nothing() {
        let b = batch(&[]);
        let out = render_to_string(render_columns, &b, &config(DisplayMode::Columns, 80));
        assert_eq!(out, "");
    }

    #[test]
    fn test_across_breaks_on_running_width() {
        // 8-char names, 10-wide columns, width 20: exactly two per line.
        let b = batch(&["aaaaaaaa", "bbbbbbbb", "cccccccc", "dddddddd", "eeeeeeee"]);
        let out = render_to_string(render_across, &b, &config(DisplayMode::Across, 20));
        let lines: Vec<_> = out.lines().map(str::trim_end).collect();
        assert_eq!(
            lines,
            vec!["aaaaaaaa  bbbbbbbb", "cccccccc  dddddddd", "eeeeeeee"]
        );
    }

    #[test]
    fn test_across_row_major_order() {
        // Across mode keeps sorted order left to right, unlike columns mode.
        let b = batch(&["a", "b", "c", "d", "e"]);
        let out = render_to_string(render_across, &b, &config(DisplayMode::Across, 6));
        let lines: Vec<_> = out.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["a  b", "c  d", "e"]);
    }

    #[test]
    fn test_across_no_leading_blank_line_when_too_narrow() {
        // Width narrower than one column: one name per line, no blank first
        // line.
        let b = batch(&["aaaa", "bbbb"]);
        let out = render_to_string(render_across, &b, &config(DisplayMode::Across, 3));
        let lines: Vec<_> = out.lines().map(str::trim_end).collect();
        assert_eq!(lines, vec!["aaaa", "bbbb"]);
    }

    #[test]
    fn test_across_empty_batch_renders_nothing() {
        let b = batch(&[]);
        let out = render_to_string(render_across, &b, &config(DisplayMode::Across, 80));
        assert_eq!(out, "");
    }

    #[test]
    fn test_single_row_when_everything_fits() {
        let b = batch(&["one", "two"]);
        let out = render_to_string(render_columns, &b, &config(DisplayMode::Columns, 80));
        assert_eq!(out.lines().count(), 1);
    }
}
