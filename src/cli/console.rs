//! Line-oriented console I/O
//!
//! Wraps an input reader and an output writer so the menu can run against
//! the real terminal or against in-memory buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use zeroize::Zeroizing;

use crate::error::{MeterError, MeterResult};

/// Console used by the interactive menu
pub struct Console<R, W> {
    input: R,
    output: W,
    /// Read secrets without echo (only meaningful on a real terminal)
    hide_secrets: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console that reads secrets from `input` like any other line
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Read secrets from the terminal without echo
    pub fn with_hidden_secrets(mut self, hide: bool) -> Self {
        self.hide_secrets = hide;
        self
    }

    /// Write a line
    pub fn say(&mut self, line: impl Display) -> MeterResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Write a prompt and read one line
    ///
    /// Returns `None` at end of input. The trailing newline is removed. A
    /// line that is not valid UTF-8 is consumed and reported as a
    /// `Validation` error; only stream failures surface as `Io`.
    pub fn prompt(&mut self, label: &str) -> MeterResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8(bytes).map_err(|_| {
            MeterError::Validation("Input is not valid UTF-8 text. Please try again.".into())
        })?;

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Prompt for a password
    pub fn prompt_secret(&mut self, label: &str) -> MeterResult<Option<Zeroizing<String>>> {
        if self.hide_secrets {
            self.output.flush()?;
            return rpassword::prompt_password(label)
                .map(|secret| Some(Zeroizing::new(secret)))
                .map_err(|e| MeterError::Io(format!("Failed to read password: {}", e)));
        }

        Ok(self.prompt(label)?.map(Zeroizing::new))
    }

    /// Consume the console, returning the output writer
    pub fn into_output(self) -> W {
        self.output
    }
}
