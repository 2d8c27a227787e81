pub mod cli;
pub mod commands;
pub mod dfl;
pub mod utils;
