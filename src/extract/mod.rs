pub mod format;
pub mod reader;

pub use format::{FormatKind, FormatSpec};
pub use reader::{parse_column_index, IdentityReader};
