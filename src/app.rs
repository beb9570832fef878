use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{WrapError, WrapResult};
use crate::limit::word_wrapper_limit;
use crate::terminal::{get_size, is_terminal, SupportsTerminalQuery};
use crate::writer::{new_responsive_writer, new_word_wrap_writer, ResponsiveWriter};

const STDIN_PATH: &str = "-";

/// Builds the writer the configuration asks for around `sink`.
pub fn build_writer<W>(config: &Config, sink: W) -> ResponsiveWriter<W>
where
    W: Write + SupportsTerminalQuery,
{
    if !config.wrap {
        return ResponsiveWriter::Passthrough(sink);
    }
    match config.width {
        Some(limit) => ResponsiveWriter::Wrapped(new_word_wrap_writer(sink, limit)),
        None => new_responsive_writer(sink),
    }
}

/// Copies `reader` into `writer` one line per `write` call.
///
/// Wrapping restarts at every newline anyway, so line-sized writes produce the
/// same output as wrapping the whole input at once.
pub fn pipe<R: BufRead, W: Write>(mut reader: R, writer: &mut W) -> io::Result<u64> {
    let mut line = Vec::new();
    let mut total = 0;
    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }
        writer.write_all(&line)?;
        total += read as u64;
    }
    writer.flush()?;
    Ok(total)
}

fn pipe_path<W: Write>(path: &Path, writer: &mut W) -> WrapResult<u64> {
    if path == Path::new(STDIN_PATH) {
        return Ok(pipe(io::stdin().lock(), writer)?);
    }
    let file = File::open(path)?;
    Ok(pipe(BufReader::new(file), writer)?)
}

/// Writes every configured input through `writer`, stdin when there are none.
pub fn run_with<W: Write>(config: &Config, writer: &mut W) -> WrapResult<u64> {
    if config.inputs.is_empty() {
        return Ok(pipe(io::stdin().lock(), writer)?);
    }
    let mut total = 0;
    for path in &config.inputs {
        debug!(path = %path.display(), "wrapping input");
        total += pipe_path(path, writer)?;
    }
    Ok(total)
}

pub fn run(config: &Config) -> WrapResult<()> {
    let stdout = io::stdout();

    if config.print_size {
        let size = get_size(&stdout).ok_or(if is_terminal(&stdout) {
            WrapError::SizeUnavailable
        } else {
            WrapError::NotATerminal
        })?;
        println!("{}x{}", size.width, size.height);
        return Ok(());
    }

    if config.print_limit {
        println!("{}", word_wrapper_limit(&stdout)?);
        return Ok(());
    }

    let mut writer = build_writer(config, stdout.lock());
    info!(limit = ?writer.limit(), "writing output");
    let total = run_with(config, &mut writer)?;
    debug!(bytes = total, "done");
    Ok(())
}
