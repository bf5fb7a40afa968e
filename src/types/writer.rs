use crate::{
    traits::Justify,
    types::Alignment
};

/// the line writer
/// contains
/// - column widths
/// - resolved column alignments
/// - the rendered output so far
pub struct Writer<'a> {
    pub widths: &'a [usize],
    pub alignments: &'a [Alignment],
    pub output: String,
}

impl<'a> Writer<'a> {
    pub fn new(widths: &'a [usize], alignments: &'a [Alignment]) -> Self {
        debug_assert!(widths.len() == alignments.len());

        Writer {
            widths,
            alignments,
            output: String::new(),
        }
    }

    /// writes a header or data line: `| a | b |`
    pub fn write_line<S: AsRef<str>>(&mut self, cells: &[S]) {
        let mut line = String::from("| ");

        for (column, cell) in cells.iter().enumerate() {
            // every populated column has a width by the time it's written
            debug_assert!(column < self.widths.len());

            let width = self.widths.get(column).copied().unwrap_or_default();
            let alignment = self.alignments.get(column).copied().unwrap_or_default();

            line.push_str(&cell.as_ref().justify(width, &alignment));
            line.push_str(" | ");
        }

        self.output.push_str(line.trim_end_matches(' '));
        self.output.push('\n');
    }

    /// writes the alignment row under the headers: `|:--|--:|`
    pub fn write_separator(&mut self) {
        self.output.push('|');

        for (width, alignment) in self.widths.iter().zip(self.alignments) {
            self.output.push_str(&alignment.separator(*width));
            self.output.push('|');
        }

        self.output.push('\n');
    }

    pub fn finish(self) -> String {
        self.output
    }
}
