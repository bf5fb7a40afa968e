use serde::Deserialize;
use crate::types::{
    Alignment,
    AlignmentTag,
    AutoIndex,
    Cell,
    Error,
    Layout,
    Writer,
    CELL_MIN_LENGTH
};

/// # Main entry point of the library
/// Collects headers, rows and column alignments, then renders them as an aligned Markdown table.
///
/// Nothing is validated while building: alignment tags are checked by `.render()`, and only for
/// columns the table actually has.
#[derive(Debug,Clone,Deserialize,PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    headers: Vec<String>,
    alignments: Vec<AlignmentTag>,
    rows: Vec<Vec<Cell>>,
    auto_index: Option<AutoIndex>,
    min_cell_length: usize,
}

impl Table {
    /// default settings:
    /// - No headers, rows or alignments
    /// - Auto-index: disabled
    /// - Minimum cell length: 1
    pub fn new() -> Self {
        Table::default()
    }

    /// builds a table from its JSON description
    /// ```text
    /// {
    ///   "headers": ["Name", "Size"],
    ///   "alignments": ["Left", "Right"],
    ///   "rows": [["a.txt", 120], ["b.txt", 4]],
    ///   "autoIndex": { "label": "#", "start": 1 },
    ///   "minCellLength": 3
    /// }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str::<Table>(json)?)
    }

    pub fn set_headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// alignments of the data columns, by position; the auto-index column is not included
    pub fn set_alignments<I>(&mut self, alignments: I) -> &mut Self
    where
        I: IntoIterator<Item = Alignment>,
    {
        self.alignments = alignments.into_iter().map(AlignmentTag::from).collect();
        self
    }

    /// same as `set_alignments()` for untyped tags such as `"Center"`, unknown tags fail at render time
    pub fn set_alignment_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.alignments = tags.into_iter().map(|tag| AlignmentTag::from(tag.as_ref())).collect();
        self
    }

    pub fn append_row<I, C>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub fn append_rows<R, I, C>(&mut self, rows: R) -> &mut Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        for row in rows {
            self.append_row(row);
        }

        self
    }

    /// enables a right aligned leading column numbering the rows from `start`
    pub fn add_auto_index(&mut self, label: impl Into<String>, start: i64) -> &mut Self {
        self.auto_index = Some(AutoIndex::new(label, start));
        self
    }

    /// `add_auto_index("#", 1)`
    pub fn add_default_auto_index(&mut self) -> &mut Self {
        self.auto_index = Some(AutoIndex::default());
        self
    }

    pub fn remove_auto_index(&mut self) -> &mut Self {
        self.auto_index = None;
        self
    }

    pub fn set_min_cell_length(&mut self, min_cell_length: usize) -> &mut Self {
        self.min_cell_length = min_cell_length;
        self
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn auto_index(&self) -> Option<&AutoIndex> {
        self.auto_index.as_ref()
    }

    pub fn min_cell_length(&self) -> usize {
        self.min_cell_length
    }

    /// true when there are neither headers nor rows, auto-index aside
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Alignment of the effective column at `column`.
    /// The auto-index column, when enabled, is column 0 and always right aligned.
    /// Columns without a configured alignment are left aligned.
    pub fn column_align(&self, column: usize) -> Result<Alignment, Error> {
        let configured = match self.auto_index {
            Some(_) if column == 0 => return Ok(Alignment::Right),
            Some(_) => self.alignments.get(column - 1),
            None => self.alignments.get(column),
        };

        match configured {
            Some(tag) => tag.resolve(column),
            None => Ok(Alignment::Left),
        }
    }

    /// Entry point: renders the current state as a Markdown table, one `\n` terminated line per row.
    /// - no headers and no rows: empty string
    /// - no headers: data rows only
    /// - otherwise: header line, alignment line, data rows
    pub fn render(&self) -> Result<String, Error> {
        let layout = Layout::new(&self.headers, &self.rows)
            .with_auto_index(self.auto_index.as_ref())
            .and_min_cell_length(self.min_cell_length);

        if layout.is_empty() {
            return Ok(String::new());
        }

        let widths = layout.widths();
        let alignments = (0..widths.len())
            .map(|column| self.column_align(column))
            .collect::<Result<Vec<Alignment>, Error>>()?;

        tracing::debug!(
            columns = widths.len(),
            rows = layout.rows.len(),
            headers = !layout.headers.is_empty(),
            "rendering table"
        );
        tracing::trace!(?widths, ?alignments, "column layout");

        let mut writer = Writer::new(&widths, &alignments);

        if !layout.headers.is_empty() {
            writer.write_line(&layout.headers);
            writer.write_separator();
        }

        for row in &layout.rows {
            writer.write_line(row);
        }

        Ok(writer.finish())
    }
}

impl Default for Table {
    fn default() -> Self {
        Table {
            headers: Vec::new(),
            alignments: Vec::new(),
            rows: Vec::new(),
            auto_index: None,
            min_cell_length: CELL_MIN_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_index_column_is_always_right_aligned() {
        let mut table = Table::new();
        table
            .set_alignments([Alignment::Center])
            .add_auto_index("n", 0);

        assert_eq!(table.column_align(0).ok(), Some(Alignment::Right));
        assert_eq!(table.column_align(1).ok(), Some(Alignment::Center));
        assert_eq!(table.column_align(2).ok(), Some(Alignment::Left));
    }

    #[test]
    fn alignment_lookup_without_auto_index() {
        let mut table = Table::new();
        table.set_alignments([Alignment::Right, Alignment::Center]);

        assert_eq!(table.column_align(0).ok(), Some(Alignment::Right));
        assert_eq!(table.column_align(1).ok(), Some(Alignment::Center));
        assert_eq!(table.column_align(7).ok(), Some(Alignment::Left));
    }

    #[test]
    fn unrecognized_tag_is_reported_at_its_effective_column() {
        let mut table = Table::new();
        table
            .set_alignment_tags(["Left", "Middle"])
            .add_default_auto_index();

        assert!(table.column_align(1).is_ok());
        match table.column_align(2) {
            Err(Error::InvalidAlignment { column, value }) => {
                assert_eq!(column, 2);
                assert_eq!(value, "Middle");
            }
            other => panic!("expected InvalidAlignment, got {other:?}"),
        }
    }

    #[test]
    fn render_does_not_mutate() {
        let mut table = Table::new();
        table
            .add_default_auto_index()
            .set_headers(["a"])
            .append_row(["x"]);

        let before = table.clone();
        let _ = table.render();

        assert_eq!(table, before);
    }
}
