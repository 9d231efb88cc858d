//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in terminal columns, so names such as "Suiça"
//! line up.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
        }
    }

    /// Cells wider than `w` are cut with an ellipsis.
    pub fn max(mut self, w: usize) -> Self {
        self.max_width = Some(w);
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render header + rows. Each line ends with '\n'; trailing spaces
    /// are trimmed.
    pub fn render(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| {
                        let raw = row.get(i).map(String::as_str).unwrap_or("");
                        match col.max_width {
                            Some(w) => truncate(raw, w),
                            None => raw.to_string(),
                        }
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                cells
                    .iter()
                    .map(|r| r[i].width())
                    .chain(std::iter::once(col.header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        push_line(&mut out, &header, &widths);

        let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &sep, &widths);

        for row in &cells {
            push_line(&mut out, row, &widths);
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (cell, w) in cells.iter().zip(widths) {
        line.push_str(cell);
        line.push_str(&" ".repeat(w.saturating_sub(cell.width()) + 2));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let mut out = String::new();
    for ch in s.chars() {
        if out.width() + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}
