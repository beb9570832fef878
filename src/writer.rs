//! Writers that reflow text to a readable width.
//!
//! [`new_responsive_writer`] picks a width from the terminal a sink is attached
//! to and falls back to the untouched sink whenever that is not possible.
//! [`new_word_wrap_writer`] skips detection for callers that already know the
//! limit they want.

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::limit::compute_limit;
use crate::terminal::{get_size, SupportsTerminalQuery};
use crate::wrap::TextWrapper;

/// Wraps every `write` to at most `limit` columns. A limit of 0 disables
/// wrapping and forwards bytes unchanged.
#[derive(Debug)]
pub struct WordWrapWriter<W> {
    limit: usize,
    inner: W,
}

impl<W: Write> WordWrapWriter<W> {
    pub fn new(inner: W, limit: usize) -> Self {
        Self { limit, inner }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Wraps `buf` and hands the result to a single sink `write`.
    ///
    /// The returned count is the sink's count for the *wrapped* text, which
    /// can be larger than `buf.len()`. Use [`Write::write`] where the standard
    /// contract matters.
    pub fn write_wrapped(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.limit == 0 {
            return self.inner.write(buf);
        }
        let wrapped = self.wrap(buf);
        self.inner.write(wrapped.as_bytes())
    }

    fn wrap(&self, buf: &[u8]) -> String {
        let text = String::from_utf8_lossy(buf);
        TextWrapper::wrap(&text, self.limit)
    }
}

impl<W: Write> Write for WordWrapWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.limit == 0 {
            return self.inner.write(buf);
        }
        // Each call is reflowed on its own, so the wrapped text has to land
        // in full before reporting the input consumed.
        let wrapped = self.wrap(buf);
        self.inner.write_all(wrapped.as_bytes())?;
        Ok(buf.len())
    }

    // The default splits formatted output into pieces, which would each be
    // wrapped from column 0.
    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.write_all(fmt::format(args).as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Either the original sink or the sink behind a [`WordWrapWriter`].
#[derive(Debug)]
pub enum ResponsiveWriter<W> {
    Passthrough(W),
    Wrapped(WordWrapWriter<W>),
}

impl<W: Write> ResponsiveWriter<W> {
    /// The active wrap limit, or `None` when the sink is used directly.
    pub fn limit(&self) -> Option<usize> {
        match self {
            ResponsiveWriter::Passthrough(_) => None,
            ResponsiveWriter::Wrapped(writer) => Some(writer.limit()),
        }
    }

    pub fn get_ref(&self) -> &W {
        match self {
            ResponsiveWriter::Passthrough(inner) => inner,
            ResponsiveWriter::Wrapped(writer) => writer.get_ref(),
        }
    }

    pub fn into_inner(self) -> W {
        match self {
            ResponsiveWriter::Passthrough(inner) => inner,
            ResponsiveWriter::Wrapped(writer) => writer.into_inner(),
        }
    }
}

impl<W: Write> Write for ResponsiveWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ResponsiveWriter::Passthrough(inner) => inner.write(buf),
            ResponsiveWriter::Wrapped(writer) => writer.write(buf),
        }
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        match self {
            ResponsiveWriter::Passthrough(inner) => inner.write_fmt(args),
            ResponsiveWriter::Wrapped(writer) => writer.write_fmt(args),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ResponsiveWriter::Passthrough(inner) => inner.flush(),
            ResponsiveWriter::Wrapped(writer) => writer.flush(),
        }
    }
}

/// Wraps `sink` to the width tier of the terminal it is attached to.
///
/// ```text
/// terminal width >= 120 columns   use 120 columns
/// terminal width >= 100 columns   use 100 columns
/// terminal width >=  80 columns   use  80 columns
/// ```
///
/// Sinks that cannot be queried, are not terminals, or whose size is unknown
/// come back unchanged. A terminal narrower than 80 columns still gets a
/// wrapper, configured with limit 0.
pub fn new_responsive_writer<W>(sink: W) -> ResponsiveWriter<W>
where
    W: Write + SupportsTerminalQuery,
{
    if !sink.supports_terminal_query() {
        debug!("sink cannot be queried for terminal size, writing unwrapped");
        return ResponsiveWriter::Passthrough(sink);
    }
    if !sink.is_terminal() {
        debug!("sink is not a terminal, writing unwrapped");
        return ResponsiveWriter::Passthrough(sink);
    }
    let Some(size) = get_size(&sink) else {
        return ResponsiveWriter::Passthrough(sink);
    };

    let limit = compute_limit(&size);
    debug!(width = size.width, height = size.height, limit, "wrapping terminal output");
    ResponsiveWriter::Wrapped(new_word_wrap_writer(sink, limit))
}

pub fn new_word_wrap_writer<W: Write>(sink: W, limit: usize) -> WordWrapWriter<W> {
    WordWrapWriter::new(sink, limit)
}
