//! # safeinput
//!
//! Retry-until-valid console input for interactive CLI applications.
//!
//! Every read prints a prompt, waits for a line, and keeps asking until the
//! answer has the requested shape and satisfies its constraint. Malformed
//! input is reported to the user and asked for again, so the caller only ever
//! receives a valid value.
//!
//! ## Features
//!
//! - **Text** - non-empty lines, or lines matched in full by a regular expression
//! - **Numbers** - `i32` / `f64`, optionally constrained to an inclusive range
//! - **Confirmation** - `Y` / `N`, case-insensitive
//! - **Custom rules** - any parser plus any check through [`utils::Terminal::ask_with`]
//! - **Testable** - any `BufRead` can feed the terminal and any `Write` can receive its output
//!
//! ("serde" feature)
//! - `Serialize` / `Deserialize` for [`utils::TerminalConfig`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use safeinput::utils::Terminal;
//!
//! let mut term = Terminal::stdio();
//!
//! let name = term.read_non_empty_line("Enter your name")?;
//! let score = term.read_int_in_range("Enter a test score", 0, 100)?;
//! let email = term.read_matching(
//!     "Enter your email address",
//!     r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
//! )?;
//! let again = term.read_yes_no("Do you like programming?")?;
//!
//! println!("{} {} {} {}", name, score, email, again);
//! # Ok::<(), safeinput::utils::TerminalError>(())
//! ```
//!
//! ## Scripted input
//!
//! ```rust
//! use std::io::Cursor;
//! use safeinput::utils::Terminal;
//!
//! let mut term = Terminal::new(Cursor::new("abc\n25\n"), Vec::<u8>::new());
//! assert_eq!(term.read_int("Enter number").unwrap(), 25);
//! ```
//!
//! ## Error Handling
//!
//! Rejected input never becomes an error. A read fails only when it cannot
//! continue:
//!
//! ```rust,no_run
//! use safeinput::utils::{Terminal, TerminalError};
//!
//! let mut term = Terminal::stdio();
//! match term.read_int("Enter your age") {
//!     Ok(age) => println!("Age: {}", age),
//!     Err(TerminalError::Exhausted { prompt }) => eprintln!("stdin closed at: {}", prompt),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Rejections are emitted as `tracing` `debug` events under the `safeinput`
//! target; install any subscriber to see them.

pub mod utils;
