//! Console interaction seam: the workflow only asks for strings and prints text.

use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Show `question` (no newline appended) and read one line of input,
    /// without its line terminator.
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// Print `message` followed by a newline.
    fn say(&mut self, message: &str) -> io::Result<()>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        (**self).ask(question)
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        (**self).say(message)
    }
}

/// Line-oriented prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }
}
