//! CLI commands.

pub mod info;
pub mod license;
pub mod run;
