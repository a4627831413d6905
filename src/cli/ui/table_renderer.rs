use crate::cli::output::current_preferences;
use crate::forms::render::{table_columns, table_rows};
use crate::schema::{FormRecord, Schema};

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

/// Widest a schema-driven cell may grow before it is truncated.
pub const MAX_CELL_WIDTH: usize = 32;

impl Table {
    /// Builds a record table: an `ID` column followed by one column per field.
    pub fn from_schema<R: FormRecord>(schema: &Schema, records: &[R]) -> Self {
        let mut columns = vec![TableColumn::new("ID").with_max_width(MAX_CELL_WIDTH)];
        columns.extend(
            table_columns(schema)
                .into_iter()
                .map(|column| TableColumn::new(column.header).with_max_width(MAX_CELL_WIDTH)),
        );

        let rows = records
            .iter()
            .zip(table_rows(schema, records))
            .map(|(record, cells)| {
                let mut row = Vec::with_capacity(cells.len() + 1);
                row.push(record.id().to_string());
                row.extend(cells);
                row
            })
            .collect();

        Self {
            columns,
            rows,
            padding: 1,
        }
    }

    /// Content width of each column from headers, rows and column limits.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                column.max_width.map_or(width, |max| width.min(max))
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(cell, widths[idx], column.alignment, self.padding)
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = vec![
            self.render_row(&header, &widths),
            horizontal_rule(&widths, self.padding),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

fn visible_width(text: &str) -> usize {
    text.chars().count()
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));
    let pad = " ".repeat(padding);
    let fill = " ".repeat(remaining);
    match alignment {
        Alignment::Left => format!("{pad}{fitted}{fill}{pad}"),
        Alignment::Right => format!("{pad}{fill}{fitted}{pad}"),
    }
}

/// Builds a horizontal rule that spans the width of the table.
pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total: usize =
        widths.iter().map(|w| w + padding * 2).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(total)
}
