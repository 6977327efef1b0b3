//! CLI commands

pub mod context;
pub mod describe;
pub mod handle;
pub mod style;

pub use context::CommandContext;
pub use describe::{DescribeOptions, run_describe, run_plugins};
pub use handle::{HandleOptions, run_handle};
