pub mod config;
pub use config::TerminalConfig;

pub mod prompt;
pub use prompt::{Hint, Prompt};

pub mod sanitize;
pub use sanitize::{FullMatch, Rejection};

pub mod source;
pub use source::LineSource;

pub mod terminal;
pub use terminal::{Terminal, TerminalError};
