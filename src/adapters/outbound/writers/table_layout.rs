use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};
use std::io::{self, Write};

/// Cell width at which multi-column tables start wrapping text
pub const MAX_CELL_WIDTH: usize = 30;

/// Wrapping rules for table cells
///
/// Multi-column tables wrap long cell text onto several lines so that wide
/// values do not push the other columns off screen. A single-column table
/// has nothing to interleave with, so wrapping and reflow are disabled and
/// long values are kept intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub auto_wrap: bool,
    pub reflow: bool,
    pub max_width: usize,
}

impl TableLayout {
    pub fn for_header(header: &[&str]) -> Self {
        let multi_column = header.len() != 1;
        Self {
            auto_wrap: multi_column,
            reflow: multi_column,
            max_width: MAX_CELL_WIDTH,
        }
    }

    /// Wraps cell text at word boundaries
    ///
    /// Words longer than the limit are never split. With reflow enabled all
    /// whitespace, line breaks included, is collapsed before wrapping;
    /// without it each existing line is wrapped on its own.
    pub fn wrap(&self, text: &str) -> String {
        if !self.auto_wrap || text.chars().count() <= self.max_width {
            return text.to_string();
        }

        let lines = if self.reflow {
            wrap_words(text.split_whitespace(), self.max_width)
        } else {
            text.lines()
                .flat_map(|line| wrap_words(line.split_whitespace(), self.max_width))
                .collect()
        };

        // Blank text has no words to wrap
        if lines.is_empty() {
            return text.to_string();
        }
        lines.join("\n")
    }
}

fn wrap_words<'a>(words: impl Iterator<Item = &'a str>, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in words {
        let word_width = word.chars().count();
        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Fixed-width table with ASCII borders
pub fn ascii_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separators(
            &[LinePosition::Top, LinePosition::Title, LinePosition::Bottom],
            LineSeparator::new('-', '+', '+', '+'),
        )
        .padding(1, 1)
        .build()
}

/// Markdown pipe table: header, dashed separator, rows
pub fn markdown_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

/// Renders a header and buffered rows in one pass
pub fn render_table<W: Write + ?Sized>(
    out: &mut W,
    format: TableFormat,
    header: &[String],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let mut table = Table::new();
    table.set_format(format);
    table.set_titles(Row::new(header.iter().map(|h| Cell::new(h)).collect()));
    for row in rows {
        table.add_row(Row::new(row.iter().map(|c| Cell::new(c)).collect()));
    }
    table.print(out)?;
    out.flush()
}
