pub mod app;
pub mod config;
pub mod errors;
pub mod limit;
pub mod terminal;
pub mod wrap;
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use errors::{WrapError, WrapResult};
pub use limit::{compute_limit, get_word_wrapper_limit, word_wrapper_limit, Tier};
pub use terminal::{get_size, is_terminal, SupportsTerminalQuery, TerminalSize};
pub use wrap::TextWrapper;
pub use writer::{new_responsive_writer, new_word_wrap_writer, ResponsiveWriter, WordWrapWriter};
