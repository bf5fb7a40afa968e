use crate::{
    traits::Justify,
    types::{ AutoIndex, Cell }
};

/// Minimum width of any column unless overridden with `Table::set_min_cell_length()`
pub const CELL_MIN_LENGTH: usize = 1;

/// Effective table content: headers and rows with the auto-index column injected,
/// every cell already converted to text, plus the width of each column.
/// ```text
/// Example
/// let layout = Layout::new(&headers, &rows)
///     .with_auto_index(auto_index.as_ref()) // Option<&AutoIndex>
///     .and_min_cell_length(min);            // usize
/// ```
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Layout {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub min_cell_length: usize,
}

impl Layout {
    pub fn new(headers: &[String], rows: &[Vec<Cell>]) -> Self {
        Layout {
            headers: headers.to_vec(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(Cell::to_string).collect())
                .collect(),
            min_cell_length: CELL_MIN_LENGTH,
        }
    }

    /// builder function prepending the index label to the headers and a running number to every row
    pub fn with_auto_index(mut self, auto_index: Option<&AutoIndex>) -> Self {
        if let Some(auto_index) = auto_index {
            self.headers.insert(0, auto_index.label.clone());

            for (position, row) in self.rows.iter_mut().enumerate() {
                row.insert(0, auto_index.number(position).to_string());
            }
        }

        self
    }

    /// builder function setting the width floor of every column
    pub fn and_min_cell_length(mut self, min_cell_length: usize) -> Self {
        self.min_cell_length = min_cell_length;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Width of every column index populated by the headers or any row.
    /// Short rows only contribute to the columns they actually have.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();

        for line in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (column, value) in line.iter().enumerate() {
                let length = value.char_len();

                match widths.get_mut(column) {
                    Some(width) => *width = (*width).max(length),
                    None => widths.push(length),
                }
            }
        }

        widths
            .into_iter()
            .map(|width| width.max(self.min_cell_length))
            .collect()
    }
}
