//! Command handlers for the docsmith CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod build;
pub mod init;
pub mod render;
pub mod stages;
pub mod title;
