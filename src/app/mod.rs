//! Front-end operations shared by the `lz77` binary: file-level commands
//! and the interactive menu.

pub mod commands;
pub mod interactive;

pub use commands::{compress_file, decompress_file};
pub use interactive::{run_interactive, InteractiveSession};
