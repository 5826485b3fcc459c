//! Recipe Metrics Tools module
//!
//! Plain functions behind the MCP tools.

pub mod preview;
pub mod recipes;
pub mod status;
