//! # Input Sanitization & Validation
//!
//! The building blocks of every read: a *parser* turns a raw line into a
//! typed value or a [`Rejection`], and a *check* accepts or rejects the parsed
//! value. [`Terminal::ask_with`](crate::utils::Terminal::ask_with) runs one of
//! each in a loop until both succeed.
//!
//! ## Parsers
//! - [`non_empty`]: the raw line, at least one character long
//! - [`int_token`] / [`float_token`]: first whitespace-delimited token as `i32` / `f64`
//! - [`yes_no`]: `y`/`Y` or `n`/`N`, nothing else
//! - [`FullMatch::parse`]: the raw line, if the whole of it matches a regex
//!
//! ## Checks
//! - [`accept`]: no constraint
//! - [`within`]: inclusive `[low, high]`
//!
//! ## Example
//! ```rust
//! use safeinput::utils::sanitize::{int_token, within, Rejection};
//!
//! let check = within(1, 16);
//! assert_eq!(int_token("8 threads"), Ok(8));
//! assert!(check(&8).is_ok());
//! assert!(matches!(check(&32), Err(Rejection::OutOfRange { .. })));
//! ```
use regex::Regex;
use std::{error::Error, fmt::Display};

/// Why an input line was refused.
///
/// Rejections never leave the retry loop; their `Display` text is the
/// diagnostic printed before the user is asked again.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Zero-length line where text was required.
    Empty,
    /// No leading `i32` token. Holds the whole line.
    NotInt(String),
    /// No leading `f64` token. Holds the whole line.
    NotReal(String),
    /// Parsed, but outside the inclusive bounds.
    OutOfRange {
        low: String,
        high: String,
        value: String,
    },
    /// Anything other than `y`, `Y`, `n` or `N`.
    NotYesNo(String),
    /// The line does not match the pattern in full.
    NoMatch { input: String, pattern: String },
    /// The line could not be decoded as UTF-8.
    Unreadable,
}

impl Rejection {
    /// Diagnostics that the original layout separates with an empty line.
    pub(crate) fn spaced(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::NoMatch { .. })
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Input cannot be empty, try again!"),
            Self::NotInt(line) => write!(f, "You must enter an int: {}", line),
            Self::NotReal(line) => write!(f, "You must enter a real number: {}", line),
            Self::OutOfRange { low, high, value } => {
                write!(f, "Number is out of range [{}-{}]: {}", low, high, value)
            }
            Self::NotYesNo(line) => write!(f, "You must answer [Y/N]! {}", line),
            Self::NoMatch { input, pattern } => {
                write!(f, "{} must match the pattern {}\nTry again!", input, pattern)
            }
            Self::Unreadable => write!(f, "Couldn't read line.."),
        }
    }
}

impl Error for Rejection {}

/// Parses the first whitespace-delimited token of a line into `$t`.
/// Everything after the token is ignored.
macro_rules! parse_token {
    ($line:expr, $t:ty, $err:expr) => {
        match $line.split_whitespace().next().map(str::parse::<$t>) {
            Some(Ok(value)) => Ok(value),
            _ => Err($err),
        }
    };
}

/// Accepts any line with at least one character. Whitespace counts.
pub fn non_empty(line: &str) -> Result<String, Rejection> {
    if line.is_empty() {
        Err(Rejection::Empty)
    } else {
        Ok(line.to_string())
    }
}

/// Leading base-10 `i32` token, e.g. `"42"`, `"-7"`, `"+3 apples"`.
pub fn int_token(line: &str) -> Result<i32, Rejection> {
    parse_token!(line, i32, Rejection::NotInt(line.to_string()))
}

/// Leading `f64` token, e.g. `"3.14"`, `"-2e3"`, `"15"`.
pub fn float_token(line: &str) -> Result<f64, Rejection> {
    parse_token!(line, f64, Rejection::NotReal(line.to_string()))
}

/// Case-insensitive `Y` / `N`. Surrounding whitespace is not trimmed.
pub fn yes_no(line: &str) -> Result<bool, Rejection> {
    match line {
        "y" | "Y" => Ok(true),
        "n" | "N" => Ok(false),
        other => Err(Rejection::NotYesNo(other.to_string())),
    }
}

/// Check that accepts every value.
pub fn accept<T>(_: &T) -> Result<(), Rejection> {
    Ok(())
}

/// Inclusive range check. With `low > high` nothing is accepted; NaN is never
/// in range.
pub fn within<N>(low: N, high: N) -> impl Fn(&N) -> Result<(), Rejection>
where
    N: PartialOrd + Display + Copy,
{
    move |value: &N| {
        if *value >= low && *value <= high {
            Ok(())
        } else {
            Err(Rejection::OutOfRange {
                low: low.to_string(),
                high: high.to_string(),
                value: value.to_string(),
            })
        }
    }
}

/// A regular expression applied to the whole line.
///
/// `abc@123` does not satisfy `[a-zA-Z0-9]+` even though it contains matching
/// substrings.
#[derive(Debug, Clone)]
pub struct FullMatch {
    regex: Regex,
    pattern: String,
}

impl FullMatch {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{})$", pattern))?,
            pattern: pattern.to_string(),
        })
    }

    /// The pattern as supplied by the caller, without anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn parse(&self, line: &str) -> Result<String, Rejection> {
        if self.regex.is_match(line) {
            Ok(line.to_string())
        } else {
            Err(Rejection::NoMatch {
                input: line.to_string(),
                pattern: self.pattern.clone(),
            })
        }
    }
}
