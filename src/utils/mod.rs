mod io_utils;
mod util;

pub use io_utils::read_trimmed_lines;
pub use util::{handle_error_and_exit, Result};
