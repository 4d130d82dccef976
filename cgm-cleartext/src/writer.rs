// CGM
// Copyright (c) 2026 The Rust CGM Project Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Statement-level writing with the Part 4 lexical conventions.

use std::io::{self, Write};

/// Line prefix of delimiter statements.
pub(crate) const DELIMITER: &str = "";
/// Line prefix of metafile descriptor statements.
pub(crate) const DESCRIPTOR: &str = " ";
/// Line prefix of picture descriptor, control, primitive, and attribute
/// statements.
pub(crate) const BODY: &str = "  ";

/// `ClearTextWriter` appends clear-text statements to a sink.
///
/// A statement is an indented keyword, space-separated tokens, and a `;`
/// terminator. Lines soft-wrap at the configured column by breaking between
/// tokens, never inside one; the continuation line carries the statement's
/// indent. A token longer than the line (a long string literal, say) is
/// written unbroken.
pub struct ClearTextWriter<W: Write> {
    sink: W,
    wrap_column: usize,
    indent: &'static str,
    column: usize,
    /// Whether the current line holds a token after the keyword or indent. A
    /// line never wraps before its first token.
    has_line_tokens: bool,
}

impl<W: Write> ClearTextWriter<W> {
    pub fn new(sink: W, wrap_column: u16) -> Self {
        ClearTextWriter {
            sink,
            wrap_column: usize::from(wrap_column),
            indent: DELIMITER,
            column: 0,
            has_line_tokens: false,
        }
    }

    /// Starts a statement with the given indent and keyword.
    pub fn begin(&mut self, indent: &'static str, keyword: &str) -> io::Result<()> {
        self.indent = indent;
        self.sink.write_all(indent.as_bytes())?;
        self.sink.write_all(keyword.as_bytes())?;
        self.column = indent.len() + keyword.len();
        self.has_line_tokens = false;
        Ok(())
    }

    /// Appends one token to the open statement, wrapping first when the
    /// token would overrun the wrap column.
    pub fn word(&mut self, token: &str) -> io::Result<()> {
        if self.has_line_tokens && self.column + 1 + token.len() > self.wrap_column {
            self.sink.write_all(b"\n")?;
            self.sink.write_all(self.indent.as_bytes())?;
            self.sink.write_all(token.as_bytes())?;
            self.column = self.indent.len() + token.len();
        }
        else {
            self.sink.write_all(b" ")?;
            self.sink.write_all(token.as_bytes())?;
            self.column += 1 + token.len();
        }
        self.has_line_tokens = true;
        Ok(())
    }

    /// Terminates the open statement.
    pub fn end(&mut self) -> io::Result<()> {
        self.sink.write_all(b";\n")?;
        self.column = 0;
        Ok(())
    }

    /// Writes a whole comment statement: `% text %;`.
    pub fn comment(&mut self, text: &str) -> io::Result<()> {
        self.sink.write_all(b"% ")?;
        self.sink.write_all(text.as_bytes())?;
        self.sink.write_all(b" %;\n")?;
        self.column = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClearTextWriter, BODY};

    fn render(wrap: u16, tokens: &[&str]) -> String {
        let mut out = Vec::new();
        let mut w = ClearTextWriter::new(&mut out, wrap);
        w.begin(BODY, "line").unwrap();
        for token in tokens {
            w.word(token).unwrap();
        }
        w.end().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn wraps_between_tokens_only() {
        let text = render(20, &["(0.0000,0.0000)", "(1.0000,1.0000)"]);
        assert_eq!(text, "  line (0.0000,0.0000)\n  (1.0000,1.0000);\n");
    }

    #[test]
    fn oversized_tokens_are_not_broken() {
        let long = "'".to_string() + &"A".repeat(100) + "'";
        let text = render(20, &[long.as_str()]);
        assert_eq!(text, format!("  line {};\n", long));
    }
}
