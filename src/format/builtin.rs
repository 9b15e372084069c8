//! Built-in declaration formatter
//!
//! Re-indents every line by bracket depth, trims trailing whitespace,
//! collapses runs of blank lines and normalises string quotes. Lines inside
//! a multi-line template literal are kept verbatim. Unbalanced or mismatched
//! brackets and unterminated strings or comments are rejected.
//!
//! Formatting is idempotent: the output only depends on the trimmed content
//! of each line and the bracket structure, neither of which it changes.

use crate::config::FormatOptions;
use crate::error::{Result, ShapezModError};

use super::Formatter;

/// Formatter needing no external tooling
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFormatter;

impl Formatter for BuiltinFormatter {
    fn name(&self) -> &str {
        "builtin"
    }

    fn format(&self, text: &str, options: &FormatOptions) -> Result<String> {
        let indent_unit = options.indent_unit();
        let quote = if options.single_quote { '\'' } else { '"' };

        let mut scanner = Scanner::default();
        let mut out = String::with_capacity(text.len());
        let mut pending_blank = false;

        for (idx, raw_line) in text.lines().enumerate() {
            let line_no = idx + 1;

            if scanner.mode == Mode::Template {
                scanner.scan(raw_line, line_no, quote)?;
                out.push_str(raw_line);
                out.push('\n');
                continue;
            }

            let trimmed = raw_line.trim();
            if trimmed.is_empty() {
                pending_blank = !out.is_empty();
                continue;
            }

            let open_lines: Vec<usize> = scanner.stack.iter().map(|(_, line)| *line).collect();
            let in_comment = scanner.mode == Mode::BlockComment;
            let line = scanner.scan(trimmed, line_no, quote)?;

            let kept = if in_comment {
                open_lines.len()
            } else {
                open_lines.len().saturating_sub(line.leading_closers)
            };
            let level = indent_level(&open_lines[..kept]);

            if pending_blank {
                out.push('\n');
                pending_blank = false;
            }
            for _ in 0..level {
                out.push_str(&indent_unit);
            }
            if in_comment && line.text.starts_with('*') {
                out.push(' ');
            }
            out.push_str(&line.text);
            out.push('\n');
        }

        scanner.finish()?;
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Code,
    BlockComment,
    Template,
}

#[derive(Debug, Default)]
struct Scanner {
    mode: Mode,
    /// Open brackets with the line they were opened on
    stack: Vec<(char, usize)>,
    /// Line where the current comment or template started
    mode_line: usize,
}

struct ScannedLine {
    text: String,
    leading_closers: usize,
}

fn closer_for(open: char) -> char {
    match open {
        '{' => '}',
        '(' => ')',
        _ => ']',
    }
}

fn rejected(line: usize, message: impl Into<String>) -> ShapezModError {
    ShapezModError::FormatRejected {
        line,
        message: message.into(),
    }
}

impl Scanner {
    fn enter(&mut self, mode: Mode, line_no: usize) {
        self.mode = mode;
        self.mode_line = line_no;
    }

    /// Track brackets over one line, rewriting string quotes to `quote`
    fn scan(&mut self, line: &str, line_no: usize, quote: char) -> Result<ScannedLine> {
        let chars: Vec<char> = line.chars().collect();
        let mut out = String::with_capacity(line.len());
        let mut leading_closers = 0;
        let mut at_start = true;
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let next = chars.get(i + 1).copied();

            match self.mode {
                Mode::BlockComment => {
                    out.push(ch);
                    if ch == '*' && next == Some('/') {
                        out.push('/');
                        i += 1;
                        self.mode = Mode::Code;
                    }
                }
                Mode::Template => {
                    out.push(ch);
                    if ch == '\\' {
                        if let Some(escaped) = next {
                            out.push(escaped);
                            i += 1;
                        }
                    } else if ch == '`' {
                        self.mode = Mode::Code;
                    }
                }
                Mode::Code => {
                    let is_closer = matches!(ch, '}' | ')' | ']');
                    if at_start && !is_closer && !ch.is_whitespace() {
                        at_start = false;
                    }

                    match ch {
                        '/' if next == Some('/') => {
                            out.extend(&chars[i..]);
                            break;
                        }
                        '/' if next == Some('*') => {
                            out.push_str("/*");
                            i += 1;
                            self.enter(Mode::BlockComment, line_no);
                        }
                        '"' | '\'' => {
                            let end = string_end(&chars, i)
                                .ok_or_else(|| rejected(line_no, "unterminated string literal"))?;
                            push_string(&mut out, &chars[i..=end], quote);
                            i = end;
                        }
                        '`' => {
                            out.push(ch);
                            self.enter(Mode::Template, line_no);
                        }
                        '{' | '(' | '[' => {
                            out.push(ch);
                            self.stack.push((ch, line_no));
                        }
                        '}' | ')' | ']' => {
                            if at_start {
                                leading_closers += 1;
                            }
                            out.push(ch);
                            match self.stack.pop() {
                                None => return Err(rejected(line_no, format!("unexpected '{ch}'"))),
                                Some((open, opened_at)) if closer_for(open) != ch => {
                                    return Err(rejected(
                                        line_no,
                                        format!(
                                            "expected '{}' to close '{open}' from line {opened_at}, found '{ch}'",
                                            closer_for(open)
                                        ),
                                    ));
                                }
                                Some(_) => {}
                            }
                        }
                        _ => out.push(ch),
                    }
                }
            }

            i += 1;
        }

        Ok(ScannedLine {
            text: out.trim_end().to_string(),
            leading_closers,
        })
    }

    fn finish(&self) -> Result<()> {
        match self.mode {
            Mode::BlockComment => {
                return Err(rejected(self.mode_line, "unterminated block comment"));
            }
            Mode::Template => {
                return Err(rejected(self.mode_line, "unterminated template literal"));
            }
            Mode::Code => {}
        }

        if let Some((open, opened_at)) = self.stack.last() {
            return Err(rejected(*opened_at, format!("unclosed '{open}'")));
        }

        Ok(())
    }
}

/// Brackets opened on the same line share one level of indentation
fn indent_level(open_lines: &[usize]) -> usize {
    open_lines
        .iter()
        .enumerate()
        .filter(|(i, line)| *i == 0 || open_lines[i - 1] != **line)
        .count()
}

/// Index of the quote closing the string that starts at `start`
fn string_end(chars: &[char], start: usize) -> Option<usize> {
    let delimiter = chars[start];
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            c if c == delimiter => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Emit a string literal, switching to the preferred quote when that needs
/// no re-escaping
fn push_string(out: &mut String, literal: &[char], quote: char) {
    let delimiter = literal[0];
    let body = &literal[1..literal.len() - 1];

    if delimiter == quote || body.contains(&quote) || body.contains(&'\\') {
        out.extend(literal);
        return;
    }

    out.push(quote);
    out.extend(body);
    out.push(quote);
}
