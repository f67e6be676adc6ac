//! Library components for the rowkit CLI.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod selector_file;
