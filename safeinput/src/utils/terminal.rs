//! # Terminal Input Helper
//!
//! [`Terminal`] repeatedly prompts until the input satisfies the requested
//! shape and constraint, then returns the typed value. Bad input is reported
//! and asked for again. It never reaches the caller.
//!
//! The only errors a read can return are [`TerminalError::Exhausted`] (the
//! input ended before a valid answer arrived), an I/O failure on the
//! underlying streams, and [`TerminalError::InvalidPattern`] for a bad
//! pattern passed to [`Terminal::read_matching`].
//!
//! ## Example 1: Ranged number
//! ```rust,no_run
//! use safeinput::utils::Terminal;
//!
//! let mut term = Terminal::stdio();
//! let year = term.read_int_in_range("Enter Year of Birth", 1940, 2010)?;
//! println!("Year: {}", year);
//! # Ok::<(), safeinput::utils::TerminalError>(())
//! ```
//!
//! ## Example 2: Confirmation loop
//! ```rust,no_run
//! use safeinput::utils::Terminal;
//!
//! let mut term = Terminal::stdio();
//! let mut names = Vec::new();
//! loop {
//!     names.push(term.read_non_empty_line("Enter First Name")?);
//!     if !term.read_yes_no("Do you want to add another person?")? {
//!         break;
//!     }
//! }
//! # Ok::<(), safeinput::utils::TerminalError>(())
//! ```
//!
//! ## Example 3: Custom constraint
//! ```rust,no_run
//! use safeinput::utils::{Prompt, Terminal, sanitize};
//!
//! let mut term = Terminal::stdio();
//! let cost = term.ask_with(
//!     &Prompt::plain("Enter Product Cost"),
//!     sanitize::float_token,
//!     sanitize::within(0.0, f64::MAX),
//! )?;
//! # Ok::<(), safeinput::utils::TerminalError>(())
//! ```

use crate::utils::config::TerminalConfig;
use crate::utils::prompt::Prompt;
use crate::utils::sanitize::{self, FullMatch, Rejection};
use crate::utils::source::LineSource;
use std::cmp::Ordering;
use std::fmt::Display;
use std::io::{self, StdinLock, Stdout, Write};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Failures that cannot be fixed by asking again.
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("Input exhausted while waiting for: {prompt}")]
    Exhausted { prompt: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Owns one input source and one output sink for a whole session.
///
/// Every read takes `&mut self`, so reads on a terminal are always sequential.
pub struct Terminal<S, W> {
    source: S,
    output: W,
    config: TerminalConfig,
}

impl Terminal<StdinLock<'static>, Stdout> {
    /// Terminal over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<S: LineSource, W: Write> Terminal<S, W> {
    pub fn new(source: S, output: W) -> Self {
        Self {
            source,
            output,
            config: TerminalConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TerminalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Gives back the source and the sink, e.g. to inspect what was printed.
    pub fn into_parts(self) -> (S, W) {
        (self.source, self.output)
    }

    /// The retry loop behind every `read_*` method.
    ///
    /// Prints `prompt`, reads a line, runs `parse` and then `check` on the
    /// result. The first value that passes both is returned. Any
    /// [`Rejection`] is printed and the loop starts over.
    pub fn ask_with<T, P, C>(
        &mut self,
        prompt: &Prompt,
        parse: P,
        check: C,
    ) -> Result<T, TerminalError>
    where
        P: Fn(&str) -> Result<T, Rejection>,
        C: Fn(&T) -> Result<(), Rejection>,
    {
        let mut attempt: usize = 0;

        loop {
            attempt += 1;
            self.show_prompt(prompt)?;

            let line = match self.source.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!(attempt, prompt = %prompt.message, "input exhausted");
                    return Err(TerminalError::Exhausted {
                        prompt: prompt.message.clone(),
                    });
                }
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!(attempt, error = %e, "couldn't decode input line");
                    self.report(&Rejection::Unreadable)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            match parse(&line).and_then(|value| check(&value).map(|()| value)) {
                Ok(value) => {
                    trace!(attempt, prompt = %prompt.message, "input accepted");
                    return Ok(value);
                }
                Err(rejection) => {
                    debug!(attempt, prompt = %prompt.message, reason = %rejection, "input rejected");
                    self.report(&rejection)?;
                }
            }
        }
    }

    /// A line with at least one character. Whitespace-only lines are accepted.
    pub fn read_non_empty_line(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.ask_with(&Prompt::plain(prompt), sanitize::non_empty, sanitize::accept)
    }

    /// Any `i32`. The rest of the line after the number is discarded.
    pub fn read_int(&mut self, prompt: &str) -> Result<i32, TerminalError> {
        self.ask_with(&Prompt::plain(prompt), sanitize::int_token, sanitize::accept)
    }

    /// An `i32` in `[low, high]`. If `low > high` no input is ever accepted.
    pub fn read_int_in_range(
        &mut self,
        prompt: &str,
        low: i32,
        high: i32,
    ) -> Result<i32, TerminalError> {
        warn_if_empty(prompt, low, high);
        self.ask_with(
            &Prompt::ranged(prompt, low, high),
            sanitize::int_token,
            sanitize::within(low, high),
        )
    }

    /// Any `f64` literal, including `NaN` and `inf`.
    pub fn read_float(&mut self, prompt: &str) -> Result<f64, TerminalError> {
        self.ask_with(&Prompt::plain(prompt), sanitize::float_token, sanitize::accept)
    }

    /// An `f64` in `[low, high]`.
    pub fn read_float_in_range(
        &mut self,
        prompt: &str,
        low: f64,
        high: f64,
    ) -> Result<f64, TerminalError> {
        warn_if_empty(prompt, low, high);
        self.ask_with(
            &Prompt::ranged(prompt, low, high),
            sanitize::float_token,
            sanitize::within(low, high),
        )
    }

    /// `y`/`Y` gives `true`, `n`/`N` gives `false`.
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool, TerminalError> {
        self.ask_with(&Prompt::yes_no(prompt), sanitize::yes_no, sanitize::accept)
    }

    /// A line matched in full by the regular expression `pattern`.
    ///
    /// The pattern is compiled before anything is printed; an invalid one
    /// fails immediately with [`TerminalError::InvalidPattern`].
    pub fn read_matching(&mut self, prompt: &str, pattern: &str) -> Result<String, TerminalError> {
        let matcher = FullMatch::new(pattern).map_err(|source| TerminalError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        self.ask_with(
            &Prompt::plain(prompt),
            |line| matcher.parse(line),
            sanitize::accept,
        )
    }

    fn show_prompt(&mut self, prompt: &Prompt) -> io::Result<()> {
        write!(
            self.output,
            "{}{}",
            self.config.spacer(),
            prompt.render(self.config.show_range_hint)
        )?;
        self.output.flush()
    }

    fn report(&mut self, rejection: &Rejection) -> io::Result<()> {
        if rejection.spaced() {
            write!(self.output, "{}", self.config.spacer())?;
        }
        writeln!(self.output, "{}", rejection)?;
        self.output.flush()
    }
}

fn warn_if_empty<N: PartialOrd + Display>(prompt: &str, low: N, high: N) {
    if matches!(low.partial_cmp(&high), Some(Ordering::Greater) | None) {
        warn!(prompt, low = %low, high = %high, "empty range, no input can be accepted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

    fn terminal(input: &str) -> TestTerminal {
        Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(term: TestTerminal) -> String {
        String::from_utf8(term.into_parts().1).unwrap()
    }

    #[test]
    fn test_terminal_non_empty_line_valid() {
        let mut term = terminal("Hello World\n");
        assert_eq!(term.read_non_empty_line("Enter text").unwrap(), "Hello World");
    }

    #[test]
    fn test_terminal_non_empty_line_empty_then_valid() {
        let mut term = terminal("\nabc\n");
        assert_eq!(term.read_non_empty_line("Enter text").unwrap(), "abc");
        let out = printed(term);
        assert_eq!(out.matches("Enter text: ").count(), 2);
        assert!(out.contains("Input cannot be empty, try again!"));
    }

    #[test]
    fn test_terminal_non_empty_line_keeps_whitespace() {
        let mut term = terminal("  padded  \n");
        assert_eq!(term.read_non_empty_line("Enter text").unwrap(), "  padded  ");
    }

    #[test]
    fn test_terminal_int_valid() {
        let mut term = terminal("42\n");
        assert_eq!(term.read_int("Enter number").unwrap(), 42);
    }

    #[test]
    fn test_terminal_int_invalid_then_valid() {
        let mut term = terminal("abc\n25\n");
        assert_eq!(term.read_int("Enter number").unwrap(), 25);
        let out = printed(term);
        assert_eq!(out.matches("You must enter an int: abc\n").count(), 1);
        assert_eq!(out.matches("You must enter").count(), 1);
    }

    #[test]
    fn test_terminal_int_several_bad_tokens_are_consumed() {
        let mut term = terminal("abc\n\n4.5\n9999999999\n-8\n");
        assert_eq!(term.read_int("Enter number").unwrap(), -8);
        assert_eq!(printed(term).matches("You must enter an int").count(), 4);
    }

    #[test]
    fn test_terminal_int_in_range_valid() {
        let mut term = terminal("15\n");
        assert_eq!(term.read_int_in_range("Enter number", 10, 20).unwrap(), 15);
    }

    #[test]
    fn test_terminal_int_in_range_out_of_range_then_valid() {
        let mut term = terminal("5\n15\n");
        assert_eq!(term.read_int_in_range("Enter number", 10, 20).unwrap(), 15);
        assert!(printed(term).contains("\nNumber is out of range [10-20]: 5\n"));
    }

    #[test]
    fn test_terminal_int_in_range_accepts_every_in_range_value_first_time() {
        for v in 10..=20 {
            let mut term = terminal(&format!("{}\n", v));
            assert_eq!(term.read_int_in_range("Enter number", 10, 20).unwrap(), v);
            assert!(!printed(term).contains("out of range"));
        }
    }

    #[test]
    fn test_terminal_int_in_range_rejects_every_out_of_range_value() {
        for v in [i32::MIN, -1, 9, 21, i32::MAX] {
            let mut term = terminal(&format!("{}\n12\n", v));
            assert_eq!(term.read_int_in_range("Enter number", 10, 20).unwrap(), 12);
            let expected = format!("Number is out of range [10-20]: {}", v);
            assert!(printed(term).contains(&expected));
        }
    }

    #[test]
    fn test_terminal_int_in_range_degenerate_never_accepts() {
        let mut term = terminal("10\n15\n20\n");
        let res = term.read_int_in_range("Enter number", 20, 10);
        assert!(matches!(res, Err(TerminalError::Exhausted { .. })));
        assert_eq!(printed(term).matches("out of range").count(), 3);
    }

    #[test]
    fn test_terminal_float_valid() {
        let mut term = terminal("3.5\n");
        assert_eq!(term.read_float("Enter number").unwrap(), 3.5);
    }

    #[test]
    fn test_terminal_float_invalid_then_valid() {
        let mut term = terminal("abc\n2.5\n");
        assert_eq!(term.read_float("Enter number").unwrap(), 2.5);
        assert!(printed(term).contains("You must enter a real number: abc\n"));
    }

    #[test]
    fn test_terminal_float_in_range_valid() {
        let mut term = terminal("15.5\n");
        assert_eq!(
            term.read_float_in_range("Enter number", 10.0, 20.0).unwrap(),
            15.5
        );
    }

    #[test]
    fn test_terminal_float_in_range_out_of_range_then_valid() {
        let mut term = terminal("5.5\n12.3\n");
        let value = term.read_float_in_range("Enter number", 10.0, 20.0).unwrap();
        assert!((value - 12.3).abs() < 1e-9);
        assert!(printed(term).contains("Number is out of range [10-20]: 5.5"));
    }

    #[test]
    fn test_terminal_float_in_range_rejects_nan() {
        let mut term = terminal("NaN\n1\n");
        assert_eq!(term.read_float_in_range("Enter GPA", 0.0, 4.0).unwrap(), 1.0);
    }

    #[test]
    fn test_terminal_yes_no() {
        for (input, expected) in [("y\n", true), ("Y\n", true), ("n\n", false), ("N\n", false)] {
            let mut term = terminal(input);
            assert_eq!(term.read_yes_no("Continue").unwrap(), expected);
        }
    }

    #[test]
    fn test_terminal_yes_no_invalid_then_valid() {
        let mut term = terminal("maybe\nY\n");
        assert!(term.read_yes_no("Continue").unwrap());
        let out = printed(term);
        assert!(out.contains("Continue [Y/N] "));
        assert!(out.contains("You must answer [Y/N]! maybe\n"));
    }

    #[test]
    fn test_terminal_yes_no_does_not_trim() {
        let mut term = terminal(" y\nn\n");
        assert!(!term.read_yes_no("Continue").unwrap());
        assert!(printed(term).contains("You must answer [Y/N]!  y\n"));
    }

    #[test]
    fn test_terminal_yes_no_crlf() {
        let mut term = terminal("N\r\n");
        assert!(!term.read_yes_no("Continue").unwrap());
    }

    #[test]
    fn test_terminal_matching_valid() {
        let mut term = terminal("abc123\n");
        assert_eq!(
            term.read_matching("Enter alphanumeric", "[a-zA-Z0-9]+").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_terminal_matching_partial_match_rejected() {
        let mut term = terminal("abc@123\nabc123\n");
        assert_eq!(
            term.read_matching("Enter alphanumeric", "[a-zA-Z0-9]+").unwrap(),
            "abc123"
        );
        let out = printed(term);
        assert!(out.contains("\nabc@123 must match the pattern [a-zA-Z0-9]+\nTry again!\n"));
    }

    #[test]
    fn test_terminal_matching_email() {
        let mut term = terminal("test@example.com\n");
        let email = term
            .read_matching(
                "Enter email",
                r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
            )
            .unwrap();
        assert_eq!(email, "test@example.com");
    }

    #[test]
    fn test_terminal_matching_invalid_pattern_prints_nothing() {
        let mut term = terminal("abc\n");
        let res = term.read_matching("Enter text", "[a-z");
        assert!(matches!(res, Err(TerminalError::InvalidPattern { .. })));
        assert!(printed(term).is_empty());
    }

    #[test]
    fn test_terminal_exhausted_input() {
        let mut term = terminal("");
        let res = term.read_non_empty_line("Enter text");
        match res {
            Err(TerminalError::Exhausted { prompt }) => assert_eq!(prompt, "Enter text"),
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn test_terminal_exhausted_after_rejection() {
        let mut term = terminal("abc\n");
        let res = term.read_int("Enter number");
        assert!(matches!(res, Err(TerminalError::Exhausted { .. })));
        assert_eq!(
            res.unwrap_err().to_string(),
            "Input exhausted while waiting for: Enter number"
        );
    }

    #[test]
    fn test_terminal_sequential_reads_do_not_leak() {
        let mut term = terminal("42 extra\nname\n7\nY\n");
        assert_eq!(term.read_int("Enter number").unwrap(), 42);
        assert_eq!(term.read_non_empty_line("Enter name").unwrap(), "name");
        assert_eq!(term.read_int_in_range("Enter score", 0, 10).unwrap(), 7);
        assert!(term.read_yes_no("Continue").unwrap());
        assert!(!printed(term).contains("cannot be empty"));
    }

    #[test]
    fn test_terminal_unreadable_line_is_retried() {
        let mut term = Terminal::new(Cursor::new(b"\xff\n5\n".to_vec()), Vec::new());
        assert_eq!(term.read_int("Enter number").unwrap(), 5);
        assert!(printed(term).contains("Couldn't read line..\n"));
    }

    #[test]
    fn test_terminal_prompt_layout() {
        let mut term = terminal("15\n");
        term.read_int_in_range("Enter number", 10, 20).unwrap();
        assert_eq!(printed(term), "\nEnter number[10-20]: ");
    }

    #[test]
    fn test_terminal_prompt_layout_compact() {
        let mut term = terminal("5\n15\n").with_config(TerminalConfig::compact());
        term.read_int_in_range("Enter number", 10, 20).unwrap();
        assert_eq!(
            printed(term),
            "Enter number[10-20]: Number is out of range [10-20]: 5\nEnter number[10-20]: "
        );
    }

    #[test]
    fn test_terminal_prompt_layout_without_range_hint() {
        let config = TerminalConfig {
            blank_line_before_prompt: false,
            show_range_hint: false,
        };
        let mut term = terminal("15\n").with_config(config);
        term.read_int_in_range("Enter number", 10, 20).unwrap();
        assert_eq!(printed(term), "Enter number: ");
    }

    #[test]
    fn test_terminal_ask_with_custom_check() {
        let mut term = terminal("-3\n19.99\n");
        let cost = term
            .ask_with(
                &Prompt::plain("Enter Product Cost"),
                sanitize::float_token,
                sanitize::within(0.0, f64::MAX),
            )
            .unwrap();
        assert_eq!(cost, 19.99);
    }
}
