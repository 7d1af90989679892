//! Line-oriented input provider
//!
//! Every read either yields a validated value or [`Prompt::Abort`] when the
//! user types a quit word (`q`, `quit`, `exit`) or input ends. Invalid input
//! is answered with a hint and the prompt is repeated.

use std::io::{self, BufRead, Write};

/// Outcome of one prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Prompt<T> {
    /// The user supplied a valid value
    Value(T),
    /// The user quit, or input ended; nothing should change
    Abort,
}

impl<T> Prompt<T> {
    /// Value if present
    #[inline]
    pub(crate) fn value(self) -> Option<T> {
        match self {
            Prompt::Value(v) => Some(v),
            Prompt::Abort => None,
        }
    }
}

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

fn is_quit_word(line: &str) -> bool {
    let key = glyph_registry::text::normalize(line);
    QUIT_WORDS.contains(&key.as_str())
}

/// Reads validated primitives from `R`, writing prompts and hints to `W`
#[derive(Debug)]
pub(crate) struct InputProvider<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputProvider<R, W> {
    /// Create provider over a reader/writer pair
    pub(crate) fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Output sink shared with the presentation layer
    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the provider, returning the writer
    #[cfg(test)]
    pub(crate) fn into_writer(self) -> W {
        self.writer
    }

    /// One trimmed line (possibly empty)
    pub(crate) fn read_line(&mut self, prompt: &str) -> io::Result<Prompt<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(Prompt::Abort);
        }
        if is_quit_word(&line) {
            return Ok(Prompt::Abort);
        }
        Ok(Prompt::Value(line.trim().to_string()))
    }

    /// One trimmed, non-empty line
    pub(crate) fn read_non_empty(&mut self, prompt: &str) -> io::Result<Prompt<String>> {
        loop {
            match self.read_line(prompt)? {
                Prompt::Value(line) if line.is_empty() => {
                    writeln!(self.writer, "Please enter a non-empty value (or 'q').")?;
                }
                other => return Ok(other),
            }
        }
    }

    /// A whole number
    pub(crate) fn read_int(&mut self, prompt: &str) -> io::Result<Prompt<i64>> {
        loop {
            let Prompt::Value(line) = self.read_line(prompt)? else {
                return Ok(Prompt::Abort);
            };
            match line.parse::<i64>() {
                Ok(value) => return Ok(Prompt::Value(value)),
                Err(_) => writeln!(self.writer, "Please enter a whole number (or 'q').")?,
            }
        }
    }

    /// A whole number within `min..=max`
    pub(crate) fn read_int_in_range(&mut self, prompt: &str, min: i64, max: i64) -> io::Result<Prompt<i64>> {
        loop {
            let Prompt::Value(value) = self.read_int(prompt)? else {
                return Ok(Prompt::Abort);
            };
            if (min..=max).contains(&value) {
                return Ok(Prompt::Value(value));
            }
            writeln!(self.writer, "Please enter a number between {min} and {max} (or 'q').")?;
        }
    }

    /// A finite number `>= min`
    pub(crate) fn read_f64_min(&mut self, prompt: &str, min: f64) -> io::Result<Prompt<f64>> {
        loop {
            let Prompt::Value(line) = self.read_line(prompt)? else {
                return Ok(Prompt::Abort);
            };
            match line.parse::<f64>() {
                Ok(value) if value.is_finite() && value >= min => return Ok(Prompt::Value(value)),
                _ => writeln!(self.writer, "Please enter a number >= {min} (or 'q').")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn provider(input: &str) -> InputProvider<Cursor<Vec<u8>>, Vec<u8>> {
        InputProvider::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: InputProvider<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_writer()).unwrap()
    }

    #[test]
    fn read_line_trims() {
        let mut p = provider("  hello world \n");
        assert_eq!(p.read_line("> ").unwrap(), Prompt::Value("hello world".to_string()));
        assert_eq!(output(p), "> ");
    }

    #[test]
    fn quit_words_and_eof_abort() {
        for input in ["q\n", " QUIT \n", "Exit\n", ""] {
            let mut p = provider(input);
            assert_eq!(p.read_line("> ").unwrap(), Prompt::Abort);
        }
    }

    #[test]
    fn non_empty_reprompts() {
        let mut p = provider("\n   \nname\n");
        assert_eq!(p.read_non_empty("Name: ").unwrap(), Prompt::Value("name".to_string()));
        let out = output(p);
        assert_eq!(out.matches("Name: ").count(), 3);
        assert_eq!(out.matches("non-empty").count(), 2);
    }

    #[test]
    fn int_reprompts_on_garbage() {
        let mut p = provider("abc\n4.5\n7\n");
        assert_eq!(p.read_int("Id: ").unwrap(), Prompt::Value(7));
        assert_eq!(output(p).matches("whole number").count(), 2);
    }

    #[test]
    fn int_in_range() {
        let mut p = provider("9\n-1\n3\n");
        assert_eq!(p.read_int_in_range("> ", 0, 8).unwrap(), Prompt::Value(3));

        let mut p = provider("9\nq\n");
        assert_eq!(p.read_int_in_range("> ", 0, 8).unwrap(), Prompt::Abort);
    }

    #[test]
    fn f64_min() {
        let mut p = provider("-2\nNaN\nlots\n2.5\n");
        assert_eq!(p.read_f64_min("Size: ", 0.0).unwrap(), Prompt::Value(2.5));
        assert_eq!(output(p).matches(">= 0").count(), 3);
    }

    #[test]
    fn prompt_helpers() {
        assert_eq!(Prompt::Value("x").value(), Some("x"));
        assert_eq!(Prompt::<u8>::Abort.value(), None);
    }
}
