mod alignment;
mod auto_index;
mod cell;
mod error;
mod layout;
mod table;
mod writer;

pub use alignment::{ Alignment, AlignmentTag };
pub use auto_index::AutoIndex;
pub use cell::Cell;
pub use error::Error;
pub use layout::{ Layout, CELL_MIN_LENGTH };
pub use table::Table;
pub use writer::Writer;
