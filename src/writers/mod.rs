pub mod row_writer;

pub use row_writer::{RowFileInfo, RowWriter};
