use serde::Deserialize;
use crate::types::Error;

/// horizontal alignment of a table column
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// parses one of the exact tags `"Left"`, `"Center"` or `"Right"`
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Left" => Some(Alignment::Left),
            "Center" => Some(Alignment::Center),
            "Right" => Some(Alignment::Right),
            _ => None,
        }
    }

    /// the separator cell of a column `width` characters wide, colons mark the aligned edge
    /// - Left: `:----`
    /// - Center: `:---:`
    /// - Right: `----:`
    pub fn separator(&self, width: usize) -> String {
        let dashes = width + 2;

        match self {
            Alignment::Left => format!(":{}", "-".repeat(dashes - 1)),
            Alignment::Center => format!(":{}:", "-".repeat(dashes - 2)),
            Alignment::Right => format!("{}:", "-".repeat(dashes - 1)),
        }
    }
}

/// The value held by a column's alignment slot.
///
/// Typed callers only ever produce `Known`. String tags (from `Table::set_alignment_tags` or
/// JSON) that don't name an alignment are kept as `Unrecognized` and rejected when the
/// column is rendered.
#[derive(Debug,Clone,Deserialize,PartialEq,Eq)]
#[serde(from = "String")]
pub enum AlignmentTag {
    Known(Alignment),
    Unrecognized(String),
}

impl AlignmentTag {
    /// resolves the tag for the column at `column`
    pub fn resolve(&self, column: usize) -> Result<Alignment, Error> {
        match self {
            AlignmentTag::Known(alignment) => Ok(*alignment),
            AlignmentTag::Unrecognized(value) => {
                tracing::debug!(column, value = %value, "rejecting unrecognized alignment");

                Err(Error::InvalidAlignment {
                    column,
                    value: value.clone(),
                })
            }
        }
    }
}

impl From<Alignment> for AlignmentTag {
    fn from(alignment: Alignment) -> Self {
        AlignmentTag::Known(alignment)
    }
}

impl From<&str> for AlignmentTag {
    fn from(tag: &str) -> Self {
        match Alignment::from_tag(tag) {
            Some(alignment) => AlignmentTag::Known(alignment),
            None => AlignmentTag::Unrecognized(tag.to_string()),
        }
    }
}

impl From<String> for AlignmentTag {
    fn from(tag: String) -> Self {
        match Alignment::from_tag(&tag) {
            Some(alignment) => AlignmentTag::Known(alignment),
            None => AlignmentTag::Unrecognized(tag),
        }
    }
}
