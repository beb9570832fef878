//! Terminal detection and sizing.
//!
//! Output handles advertise whether they can be asked about terminal geometry
//! through [`SupportsTerminalQuery`]. File-descriptor (or console-handle)
//! backed types ask the platform; in-memory sinks answer "no" without touching
//! the OS; adapters such as `BufWriter` forward to the handle they wrap.

use std::fs::File;
use std::io::{self, BufWriter, Cursor, LineWriter, Write};

use tracing::debug;

/// Character-cell dimensions of a terminal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    pub width: u16,
    pub height: u16,
}

impl TerminalSize {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<(terminal_size::Width, terminal_size::Height)> for TerminalSize {
    fn from((width, height): (terminal_size::Width, terminal_size::Height)) -> Self {
        Self {
            width: width.0,
            height: height.0,
        }
    }
}

/// Capability check for output handles that may be attached to a terminal.
///
/// The defaults describe a handle that cannot be queried at all, which is the
/// right answer for in-memory buffers.
pub trait SupportsTerminalQuery {
    /// Whether this handle can be asked about terminal geometry.
    fn supports_terminal_query(&self) -> bool {
        false
    }

    /// Whether the handle is connected to an interactive terminal.
    fn is_terminal(&self) -> bool {
        false
    }

    /// Current window size. Queried fresh on every call.
    fn terminal_size(&self) -> Option<TerminalSize> {
        None
    }
}

// Handles with a real descriptor underneath. `IsTty` and `terminal_size_of`
// pick the unix or windows implementation for us.
macro_rules! impl_platform_query {
    ($($handle:ty),* $(,)?) => {
        $(
            impl SupportsTerminalQuery for $handle {
                fn supports_terminal_query(&self) -> bool {
                    true
                }

                fn is_terminal(&self) -> bool {
                    crossterm::tty::IsTty::is_tty(self)
                }

                fn terminal_size(&self) -> Option<TerminalSize> {
                    terminal_size::terminal_size_of(self).map(TerminalSize::from)
                }
            }
        )*
    };
}

#[cfg(any(unix, windows))]
impl_platform_query!(
    io::Stdout,
    io::StdoutLock<'_>,
    io::Stderr,
    io::StderrLock<'_>,
    File,
);

impl SupportsTerminalQuery for Vec<u8> {}
impl<T> SupportsTerminalQuery for Cursor<T> {}
impl SupportsTerminalQuery for io::Sink {}

impl<H: SupportsTerminalQuery + ?Sized> SupportsTerminalQuery for &mut H {
    fn supports_terminal_query(&self) -> bool {
        (**self).supports_terminal_query()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    fn terminal_size(&self) -> Option<TerminalSize> {
        (**self).terminal_size()
    }
}

impl<H: SupportsTerminalQuery + ?Sized> SupportsTerminalQuery for Box<H> {
    fn supports_terminal_query(&self) -> bool {
        (**self).supports_terminal_query()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    fn terminal_size(&self) -> Option<TerminalSize> {
        (**self).terminal_size()
    }
}

impl<W: Write + SupportsTerminalQuery> SupportsTerminalQuery for BufWriter<W> {
    fn supports_terminal_query(&self) -> bool {
        self.get_ref().supports_terminal_query()
    }

    fn is_terminal(&self) -> bool {
        self.get_ref().is_terminal()
    }

    fn terminal_size(&self) -> Option<TerminalSize> {
        self.get_ref().terminal_size()
    }
}

impl<W: Write + SupportsTerminalQuery> SupportsTerminalQuery for LineWriter<W> {
    fn supports_terminal_query(&self) -> bool {
        self.get_ref().supports_terminal_query()
    }

    fn is_terminal(&self) -> bool {
        self.get_ref().is_terminal()
    }

    fn terminal_size(&self) -> Option<TerminalSize> {
        self.get_ref().terminal_size()
    }
}

/// Returns true if `handle` is a queryable handle attached to a terminal.
pub fn is_terminal<H: SupportsTerminalQuery + ?Sized>(handle: &H) -> bool {
    handle.supports_terminal_query() && handle.is_terminal()
}

/// Returns the current size of the terminal behind `handle`.
///
/// A failed query means "unknown"; it is never retried.
pub fn get_size<H: SupportsTerminalQuery + ?Sized>(handle: &H) -> Option<TerminalSize> {
    if !handle.supports_terminal_query() {
        return None;
    }
    let size = handle.terminal_size();
    if size.is_none() {
        debug!("terminal size query failed");
    }
    size
}
