//! Source discovery and CSV ingestion for the orbis pipeline.
//!
//! Lists the eligible extracts in a directory, reads each one as an all-text
//! table tagged with its filename, and concatenates them into one frame.

pub mod csv;
pub mod discovery;
pub mod error;
pub mod merge;

pub use csv::{NULL_TOKENS, is_null_token, read_and_tag, read_csv_frame};
pub use discovery::{eligible_file_names, list_source_files};
pub use error::{IngestError, Result};
pub use merge::{merge, merge_frames};
