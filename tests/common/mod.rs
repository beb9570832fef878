use std::io::{self, Write};
use termwrap::{SupportsTerminalQuery, TerminalSize};
use unicode_width::UnicodeWidthStr;

/// In-memory sink that claims to be a terminal of a given size.
#[derive(Debug, Default)]
pub struct FakeTerminal {
    pub output: Vec<u8>,
    pub interactive: bool,
    pub size: Option<TerminalSize>,
}

impl FakeTerminal {
    pub fn with_width(width: u16) -> Self {
        Self {
            output: Vec::new(),
            interactive: true,
            size: Some(TerminalSize::new(width, 40)),
        }
    }

    /// A terminal whose window size cannot be read.
    #[allow(dead_code)]
    pub fn without_size() -> Self {
        Self {
            output: Vec::new(),
            interactive: true,
            size: None,
        }
    }

    /// Queryable, but redirected somewhere that is not a terminal.
    #[allow(dead_code)]
    pub fn redirected() -> Self {
        Self {
            output: Vec::new(),
            interactive: false,
            size: None,
        }
    }

    #[allow(dead_code)]
    pub fn text(&self) -> String {
        String::from_utf8(self.output.clone()).expect("output should be UTF-8")
    }
}

impl Write for FakeTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SupportsTerminalQuery for FakeTerminal {
    fn supports_terminal_query(&self) -> bool {
        true
    }

    fn is_terminal(&self) -> bool {
        self.interactive
    }

    fn terminal_size(&self) -> Option<TerminalSize> {
        self.size
    }
}

/// Sink whose every write fails with the given kind.
#[allow(dead_code)]
pub struct FailingSink(pub io::ErrorKind);

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "sink rejected write"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(self.0, "sink rejected flush"))
    }
}

/// Widest line in `text`, measured in display columns.
#[allow(dead_code)]
pub fn max_line_width(text: &str) -> usize {
    text.lines().map(|line| line.width()).max().unwrap_or(0)
}

/// Lines wider than `limit` that are not a single over-long token.
#[allow(dead_code)]
pub fn overflowing_lines(text: &str, limit: usize) -> Vec<String> {
    text.lines()
        .filter(|line| line.width() > limit && line.trim().contains(char::is_whitespace))
        .map(str::to_string)
        .collect()
}

#[allow(dead_code)]
pub const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog while the \
    terminal politely reflows every sentence to a comfortable reading width, keeping \
    paragraphs intact and never splitting a word such as antidisestablishmentarianism \
    in the middle.\n\nA second paragraph follows after a blank line.\n";
