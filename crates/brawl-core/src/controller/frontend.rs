//! Text input/output for the match controller.
//!
//! The controller talks to the human through the [`Frontend`] trait: it writes
//! status lines and blocks on prompts. [`TerminalFrontend`] implements it over
//! any `BufRead`/`Write` pair, which covers both stdin/stdout and in-memory
//! buffers in tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::num::IntErrorKind;

use crate::error::{InvalidSelectionError, MatchError};

/// Blocking request/response channel to the human.
pub trait Frontend {
    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Io`] if the output cannot be written.
    fn show(&mut self, line: &str) -> Result<(), MatchError>;

    /// Writes `text` and waits for one line of input, returned without the
    /// trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InputClosed`] at end of input and
    /// [`MatchError::Io`] on read or write failure.
    fn prompt(&mut self, text: &str) -> Result<String, MatchError>;
}

/// A [`Frontend`] over a line reader and a writer.
///
/// # Example
///
/// ```
/// use brawl_core::controller::{Frontend, TerminalFrontend};
///
/// let mut frontend = TerminalFrontend::new("2\n".as_bytes(), Vec::new());
/// let answer = frontend.prompt("Pick: ")?;
/// assert_eq!(answer, "2");
///
/// let (_, output) = frontend.into_parts();
/// assert_eq!(String::from_utf8(output).unwrap(), "Pick: ");
/// # Ok::<(), brawl_core::error::MatchError>(())
/// ```
#[derive(Debug)]
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    /// Wraps an input reader and an output writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl TerminalFrontend<StdinLock<'static>, Stdout> {
    /// Creates a frontend on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn show(&mut self, line: &str) -> Result<(), MatchError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<String, MatchError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MatchError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Parses a 1-based menu choice into a zero-based index below `count`.
///
/// Surrounding whitespace is ignored. Numbers too large to represent are
/// treated as out of range, not as non-numeric.
///
/// # Errors
///
/// - [`InvalidSelectionError::NotANumber`] if the input is not an integer
/// - [`InvalidSelectionError::OutOfRange`] if it is outside `1..=count`
///
/// # Example
///
/// ```
/// use brawl_core::controller::parse_selection;
/// use brawl_core::error::InvalidSelectionError;
///
/// assert_eq!(parse_selection(" 2 ", 3), Ok(1));
/// assert!(matches!(parse_selection("5", 3), Err(InvalidSelectionError::OutOfRange { .. })));
/// assert!(matches!(parse_selection("abc", 3), Err(InvalidSelectionError::NotANumber { .. })));
/// ```
pub fn parse_selection(input: &str, count: usize) -> Result<usize, InvalidSelectionError> {
    let trimmed = input.trim();
    let out_of_range = || InvalidSelectionError::OutOfRange {
        input: trimmed.to_string(),
        max: count,
    };

    let choice = match trimmed.parse::<i64>() {
        Ok(choice) => choice,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(out_of_range());
        }
        Err(_) => {
            return Err(InvalidSelectionError::NotANumber {
                input: trimmed.to_string(),
            })
        }
    };

    usize::try_from(choice)
        .ok()
        .filter(|&c| (1..=count).contains(&c))
        .map(|c| c - 1)
        .ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod parse_selection_tests {
        use super::*;

        #[test]
        fn valid_choices_are_zero_based() {
            assert_eq!(parse_selection("1", 3), Ok(0));
            assert_eq!(parse_selection("3", 3), Ok(2));
            assert_eq!(parse_selection("+2", 3), Ok(1));
        }

        #[test]
        fn zero_and_negative_are_out_of_range() {
            assert!(matches!(
                parse_selection("0", 3),
                Err(InvalidSelectionError::OutOfRange { max: 3, .. })
            ));
            assert!(matches!(
                parse_selection("-1", 3),
                Err(InvalidSelectionError::OutOfRange { .. })
            ));
        }

        #[test]
        fn overflow_is_out_of_range() {
            assert!(matches!(
                parse_selection("99999999999999999999999", 3),
                Err(InvalidSelectionError::OutOfRange { .. })
            ));
        }

        #[test]
        fn text_and_blank_are_not_numbers() {
            assert_eq!(
                parse_selection("abc", 3),
                Err(InvalidSelectionError::NotANumber {
                    input: "abc".into()
                })
            );
            assert!(matches!(
                parse_selection("", 3),
                Err(InvalidSelectionError::NotANumber { .. })
            ));
            assert!(matches!(
                parse_selection("1.5", 3),
                Err(InvalidSelectionError::NotANumber { .. })
            ));
        }
    }

    mod terminal_tests {
        use super::*;

        #[test]
        fn prompt_strips_line_endings() {
            let mut frontend = TerminalFrontend::new("3\r\n".as_bytes(), Vec::new());
            assert_eq!(frontend.prompt("> ").unwrap(), "3");
        }

        #[test]
        fn prompt_at_eof_is_input_closed() {
            let mut frontend = TerminalFrontend::new(io::empty(), Vec::new());
            assert!(matches!(frontend.prompt("> "), Err(MatchError::InputClosed)));
        }

        #[test]
        fn show_writes_a_line() {
            let mut frontend = TerminalFrontend::new(io::empty(), Vec::new());
            frontend.show("hello").unwrap();
            let (_, output) = frontend.into_parts();
            assert_eq!(output, b"hello\n");
        }
    }
}
