use std::fmt::Display;
use std::io::{self, BufRead, Write};

pub const PATH_PROMPT: &str = "Input folder or file path: ";
pub const EXTENSION_PROMPT: &str = "Input target extension: ";
pub const FINISH_PROMPT: &str = "Press ENTER to finish the program...";

/// Line-oriented question/answer over any reader and writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` without a newline and read one line back.
    ///
    /// The trailing line break is removed; end of input yields an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let trimmed_len = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(trimmed_len);
        Ok(answer)
    }

    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Wait for ENTER before exiting
    pub fn pause(&mut self) -> io::Result<()> {
        self.ask(FINISH_PROMPT).map(|_| ())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
