//! Maps raw terminal widths onto a handful of readable line widths.
//!
//! ```text
//! width >= 120   wrap at 120
//! width >= 100   wrap at 100
//! width >=  80   wrap at  80
//! otherwise      no wrapping
//! ```

use std::io;

use tracing::debug;

use crate::errors::{WrapError, WrapResult};
use crate::terminal::{get_size, is_terminal, SupportsTerminalQuery, TerminalSize};

const WIDE_LIMIT: usize = 120;
const STANDARD_LIMIT: usize = 100;
const NARROW_LIMIT: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Unwrapped,
    Narrow,
    Standard,
    Wide,
}

impl Tier {
    /// Lower bounds are inclusive: a width of exactly 100 is `Standard`.
    pub fn from_width(width: u16) -> Self {
        match width as usize {
            w if w >= WIDE_LIMIT => Tier::Wide,
            w if w >= STANDARD_LIMIT => Tier::Standard,
            w if w >= NARROW_LIMIT => Tier::Narrow,
            _ => Tier::Unwrapped,
        }
    }

    /// Column limit for this tier; 0 disables wrapping.
    pub fn limit(self) -> usize {
        match self {
            Tier::Unwrapped => 0,
            Tier::Narrow => NARROW_LIMIT,
            Tier::Standard => STANDARD_LIMIT,
            Tier::Wide => WIDE_LIMIT,
        }
    }
}

pub fn compute_limit(size: &TerminalSize) -> usize {
    Tier::from_width(size.width).limit()
}

/// Wrap limit for the terminal behind `handle`.
///
/// Unlike [`crate::writer::new_responsive_writer`], which silently falls back to
/// pass-through, this reports why no limit could be determined.
pub fn word_wrapper_limit<H: SupportsTerminalQuery + ?Sized>(handle: &H) -> WrapResult<usize> {
    if !is_terminal(handle) {
        return Err(WrapError::NotATerminal);
    }
    let size = get_size(handle).ok_or(WrapError::SizeUnavailable)?;
    let limit = compute_limit(&size);
    debug!(width = size.width, height = size.height, limit, "computed wrap limit");
    Ok(limit)
}

/// [`word_wrapper_limit`] for the process's standard output.
pub fn get_word_wrapper_limit() -> WrapResult<usize> {
    word_wrapper_limit(&io::stdout())
}
