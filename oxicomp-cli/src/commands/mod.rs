//! Command implementations for OxiComp CLI.

pub mod codec;
pub mod entropy;
pub mod report;

pub use codec::{cmd_compress, cmd_decompress};
pub use entropy::cmd_entropy;
pub use report::{ReportOptions, cmd_report};
