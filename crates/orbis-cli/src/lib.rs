//! Pipeline orchestration and run-scoped logging for the orbis CLI.

pub mod logging;
pub mod pipeline;
pub mod run_id;
