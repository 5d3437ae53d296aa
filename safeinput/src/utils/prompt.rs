//! # Prompts
//!
//! A [`Prompt`] is the text printed before every read attempt. The caller
//! supplies only the message; the terminal adds the annotation that matches
//! the operation:
//!
//! | hint             | rendered                    |
//! |------------------|-----------------------------|
//! | [`Hint::None`]   | `Enter text: `              |
//! | [`Hint::Range`]  | `Enter score[0-100]: `      |
//! | [`Hint::YesNo`]  | `Continue? [Y/N] `          |

use std::fmt::Display;

/// Annotation appended to a prompt message.
#[derive(Debug, Clone, PartialEq)]
pub enum Hint {
    None,
    /// Inclusive bounds, already formatted.
    Range(String, String),
    YesNo,
}

/// A message plus its annotation. Built per call, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub message: String,
    pub hint: Hint,
}

impl Prompt {
    pub fn plain(message: &str) -> Self {
        Self {
            message: message.to_string(),
            hint: Hint::None,
        }
    }

    pub fn ranged<N: Display>(message: &str, low: N, high: N) -> Self {
        Self {
            message: message.to_string(),
            hint: Hint::Range(low.to_string(), high.to_string()),
        }
    }

    pub fn yes_no(message: &str) -> Self {
        Self {
            message: message.to_string(),
            hint: Hint::YesNo,
        }
    }

    /// Renders the prompt, optionally dropping the range annotation.
    pub(crate) fn render(&self, show_range_hint: bool) -> String {
        match &self.hint {
            Hint::Range(low, high) if show_range_hint => {
                format!("{}[{}-{}]: ", self.message, low, high)
            }
            Hint::None | Hint::Range(..) => format!("{}: ", self.message),
            Hint::YesNo => format!("{} [Y/N] ", self.message),
        }
    }
}

impl Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(true))
    }
}
