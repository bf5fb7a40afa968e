use core::fmt;
use chrono::NaiveDate;
use derive_more::From;
use serde::Deserialize;

/// A single table value. Every variant renders through `Display`, which is also what column
/// widths are measured on.
///
/// Deserialized untagged from JSON numbers, booleans, strings and `null`. Strings always stay
/// `Text` so they render exactly as written; `Date` is only built from Rust.
#[derive(Debug,Clone,Deserialize,From,PartialEq)]
#[serde(untagged)]
pub enum Cell {
   #[from]
    Integer(i64),
   #[from]
    Unsigned(u64),
   #[from]
    Float(f64),
   #[from]
    Boolean(bool),
   #[from]
   #[serde(skip_deserializing)]
    Date(NaiveDate),
   #[from]
    Text(String),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Integer(value) => write!(f, "{value}"),
            Cell::Unsigned(value) => write!(f, "{value}"),
            Cell::Float(value) => write!(f, "{value}"),
            Cell::Boolean(value) => write!(f, "{value}"),
            Cell::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            Cell::Text(value) => f.write_str(value),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Integer(i64::from(value))
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(value) => Cell::Integer(value),
            Err(_) => Cell::Unsigned(value as u64),
        }
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Cell::Empty)
    }
}
