use insta::assert_snapshot;
use std::io::Write;
use termwrap::{new_responsive_writer, new_word_wrap_writer};

mod common;
use common::*;

fn wrap_at(limit: usize, text: &str) -> String {
    let mut writer = new_word_wrap_writer(Vec::new(), limit);
    writer.write_all(text.as_bytes()).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}

#[test]
fn test_paragraph_at_forty_columns() {
    let output = wrap_at(40, PARAGRAPH);

    assert_snapshot!(output.trim_end(), @r"
    The quick brown fox jumps over the lazy
    dog while the terminal politely reflows
    every sentence to a comfortable reading
    width, keeping paragraphs intact and
    never splitting a word such as
    antidisestablishmentarianism in the
    middle.

    A second paragraph follows after a blank
    line.
    ");
}

#[test]
fn test_paragraph_with_token_wider_than_limit() {
    let output = wrap_at(25, PARAGRAPH);

    assert_snapshot!(output.trim_end(), @r"
    The quick brown fox jumps
    over the lazy dog while
    the terminal politely
    reflows every sentence to
    a comfortable reading
    width, keeping paragraphs
    intact and never
    splitting a word such as
    antidisestablishmentarianism
    in the middle.

    A second paragraph
    follows after a blank
    line.
    ");
}

#[test]
fn test_paragraph_on_wide_terminal() {
    let mut writer = new_responsive_writer(FakeTerminal::with_width(200));
    writer.write_all(PARAGRAPH.as_bytes()).unwrap();
    let output = writer.into_inner().text();

    assert_snapshot!(output.trim_end(), @r"
    The quick brown fox jumps over the lazy dog while the terminal politely reflows every sentence to a comfortable reading
    width, keeping paragraphs intact and never splitting a word such as antidisestablishmentarianism in the middle.

    A second paragraph follows after a blank line.
    ");
}
