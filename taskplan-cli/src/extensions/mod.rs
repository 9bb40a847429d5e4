//! Contains functionality which is used by commands.

pub mod config;
pub mod generate;
pub mod grid;
pub mod io;
pub mod results;
pub mod solve;
pub mod text;
