//! Presentation settings for a [`Terminal`](crate::utils::Terminal).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How prompts and diagnostics are laid out.
///
/// With the `serde` feature enabled this can be loaded from any serde format;
/// missing fields fall back to [`TerminalConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerminalConfig {
    /// Write an empty line before every prompt and before range/pattern diagnostics.
    pub blank_line_before_prompt: bool,
    /// Append `[low-high]` to the prompt of ranged reads.
    pub show_range_hint: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            blank_line_before_prompt: true,
            show_range_hint: true,
        }
    }
}

impl TerminalConfig {
    /// Compact layout: no spacer lines.
    pub fn compact() -> Self {
        Self {
            blank_line_before_prompt: false,
            ..Self::default()
        }
    }

    pub(crate) fn spacer(&self) -> &'static str {
        if self.blank_line_before_prompt { "\n" } else { "" }
    }
}
