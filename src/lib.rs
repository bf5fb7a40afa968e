//! # Introduction
//!
//! mdgen writes Markdown for tools that generate documentation (READMEs, changelogs, reports)
//! out of structured data. Its core is a table renderer that pads every column to a common
//! width so the table reads aligned in plain text as well as rendered. A handful of inline
//! helpers cover the rest of a typical README: links, badges, headings, images, quotes,
//! spoilers and code fences.
//!
//! Feature Road Map:
//! - [X] Aligned tables (left, center, right)
//! - [X] Auto-generated index column
//! - [X] Ragged rows
//! - [X] Tables described as JSON
//! - [X] Inline helpers (links, badges, headings, images, quotes, spoilers, code)
//! - [ ] Escaping `|` inside cells
//! - [ ] Display-width measurement for wide characters
//!
//! Widths are character counts, so CJK text and emoji will look misaligned in a terminal even
//! though the Markdown stays valid.
//!
//! # Basic Usage
//! The main entry point is the `Table` struct. Build it up with the chained setters and call
//! `.render()` as many times as needed, it never changes the table.
//!
//! ### Simple render
//! ```
//! use mdgen::types::{ Alignment, Table };
//!
//! let mut table = Table::new();
//! table
//!     .add_auto_index("Index", 999)
//!     .set_alignments([Alignment::Center, Alignment::Right])
//!     .set_headers(["Header #1", "Header #2"])
//!     .append_row(["123", "456"]);
//!
//! let markdown = table.render().unwrap();
//!
//! assert_eq!(markdown, "\
//! | Index | Header #1 | Header #2 |
//! |------:|:---------:|----------:|
//! |   999 |    123    |       456 |
//! ");
//! ```
//!
//! ### From JSON
//! ```
//! use mdgen::types::Table;
//!
//! let table = Table::from_json(r#"{ "headers": ["Version"], "rows": [["1.0.0"]] }"#).unwrap();
//!
//! assert_eq!(table.render().unwrap(), "| Version |\n|:--------|\n| 1.0.0   |\n");
//! ```
pub mod markdown;
pub mod traits;
pub mod types;
