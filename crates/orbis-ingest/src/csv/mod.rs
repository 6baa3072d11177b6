//! CSV reading.

mod header;
mod reader;

pub use header::unique_headers;
pub use reader::{NULL_TOKENS, is_null_token, read_and_tag, read_csv_frame};
