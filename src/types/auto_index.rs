use serde::Deserialize;

/// # Synthetic leading column
/// Numbers every row sequentially from `start`. Always right aligned.
#[derive(Debug,Clone,Deserialize,PartialEq,Eq)]
#[serde(default)]
pub struct AutoIndex {
    pub label: String,
    pub start: i64,
}

impl AutoIndex {
    pub fn new(label: impl Into<String>, start: i64) -> Self {
        AutoIndex {
            label: label.into(),
            start,
        }
    }

    /// index value for the row at position `row`
    pub fn number(&self, row: usize) -> i64 {
        let offset = i64::try_from(row).unwrap_or(i64::MAX);
        self.start.saturating_add(offset)
    }
}

impl Default for AutoIndex {
    /// default settings:
    /// - Label: `#`
    /// - Start: 1
    fn default() -> Self {
        AutoIndex::new("#", 1)
    }
}
