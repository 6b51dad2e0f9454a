//! CLI command implementations
//!
//! Each command module implements a specific ddlgen CLI command.

pub mod check;
pub mod dialects;
pub mod generate;
pub mod init;
