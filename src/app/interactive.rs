//! Menu-driven interactive mode.
//!
//! The session reads lines from any [`BufRead`] and writes prompts to any
//! [`Write`], so it runs the same against a terminal or an in-memory script.

use std::io::{self, BufRead, Write};

use super::commands::{compress_file, decompress_file};
use crate::config::CodecConfig;

/// One interactive session over explicit input and output streams.
pub struct InteractiveSession<R, W, E> {
    input: R,
    output: W,
    errors: E,
    config: CodecConfig,
}

impl<R: BufRead, W: Write, E: Write> InteractiveSession<R, W, E> {
    pub fn new(input: R, output: W, errors: E, config: CodecConfig) -> Self {
        Self {
            input,
            output,
            errors,
            config,
        }
    }

    /// Show the menu until the user exits or input ends.
    ///
    /// Failures of a single compress or decompress are reported on the
    /// error stream and the menu is shown again; only failures of the
    /// streams themselves end the session with an error.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "LZ77 Compression Tool")?;
        writeln!(self.output, "=====================")?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Options:")?;
            writeln!(self.output, "1. Compress file")?;
            writeln!(self.output, "2. Decompress file")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Select option: ")? else {
                return Ok(());
            };

            let keep_going = match choice.trim() {
                "1" => self.compress()?,
                "2" => self.decompress()?,
                "3" => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid option, try again.")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }

    /// Returns `false` if input ended before both paths were given.
    fn compress(&mut self) -> io::Result<bool> {
        let Some(input) = self.prompt("Enter input file path: ")? else {
            return Ok(false);
        };
        let Some(output) = self.prompt("Enter output file path: ")? else {
            return Ok(false);
        };

        match compress_file(input.trim(), output.trim(), &self.config) {
            Ok(summary) => {
                writeln!(self.output, "Compression completed successfully!")?;
                writeln!(self.output, "{summary}")?;
            }
            Err(e) => writeln!(self.errors, "Error: {e}")?,
        }
        Ok(true)
    }

    fn decompress(&mut self) -> io::Result<bool> {
        let Some(input) = self.prompt("Enter compressed file path: ")? else {
            return Ok(false);
        };
        let Some(output) = self.prompt("Enter output file path: ")? else {
            return Ok(false);
        };

        match decompress_file(input.trim(), output.trim(), &self.config) {
            Ok(bytes) => {
                writeln!(self.output, "Decompression completed successfully!")?;
                writeln!(self.output, "Decompressed size: {bytes} bytes")?;
                writeln!(self.output, "Saved to: {}", output.trim())?;
            }
            Err(e) => writeln!(self.errors, "Error: {e}")?,
        }
        Ok(true)
    }

    /// Print `message` and read one line, or `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Recover the output and error streams.
    pub fn into_streams(self) -> (W, E) {
        (self.output, self.errors)
    }
}

/// Run an interactive session to completion.
pub fn run_interactive<R: BufRead, W: Write, E: Write>(
    input: R,
    output: W,
    errors: E,
    config: CodecConfig,
) -> io::Result<()> {
    InteractiveSession::new(input, output, errors, config).run()
}
