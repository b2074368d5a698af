//! Mode-stack scan driver.
//!
//! The scanner walks the input left to right, trying the current mode's
//! rules in priority order at each position. Every character of the input
//! ends up in exactly one token: whitespace is tokenized too, and anything
//! no rule recognizes degrades to a one-character plain-text token rather
//! than an error. Scanning therefore never fails and always terminates —
//! each step either advances the position or strictly shrinks the mode
//! stack before re-dispatching.

use crate::pure::rules::{self, Action, Mode, NoMatchPolicy};
use crate::pure::token::{Token, TokenKind};

/// Scan `text` from the default mode. The returned scanner is a lazy,
/// finite iterator over tokens; a fresh scan always starts with an empty
/// stack and cannot be restarted mid-stream.
pub fn scan(text: &str) -> Scanner<'_> {
    Scanner::new(text)
}

/// Convenience function to scan a string and collect all tokens
pub fn tokenize(text: &str) -> Vec<Token> {
    scan(text).collect()
}

/// Stateful cursor over one input buffer.
///
/// All state is transient: the mode stack and position are created fresh
/// per input and discarded when the stream ends, so independent scans can
/// run concurrently against the shared rule tables.
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    stack: Vec<Mode>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            stack: vec![Mode::Root],
        }
    }

    /// Start scanning inside `mode` (hosts resuming mid-construct). Root
    /// stays at the bottom of the stack so pops behave as usual.
    pub fn with_mode(text: &'a str, mode: Mode) -> Self {
        let stack = if mode == Mode::Root {
            vec![Mode::Root]
        } else {
            vec![Mode::Root, mode]
        };
        Self {
            text,
            pos: 0,
            stack,
        }
    }

    /// Current mode (top of the stack)
    pub fn mode(&self) -> Mode {
        self.stack.last().copied().unwrap_or(Mode::Root)
    }

    /// Current byte position of the cursor
    pub fn pos(&self) -> usize {
        self.pos
    }

    fn at_line_start(&self) -> bool {
        self.pos == 0 || self.text.as_bytes()[self.pos - 1] == b'\n'
    }

    fn at_word_boundary(&self) -> bool {
        let before = self.text[..self.pos].chars().next_back();
        let after = self.text[self.pos..].chars().next();
        is_word(before) != is_word(after)
    }

    /// Popping the bottom (default) mode is a no-op
    fn pop_mode(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Emit one character of plain text. An unmatched newline means a
    /// nested mode ran off the end of its line (e.g. an unterminated
    /// string); the stack resets to the default mode there.
    fn fallback_token(&mut self) -> Token {
        let start = self.pos;
        let ch = self.text[self.pos..].chars().next();
        self.pos += ch.map_or(1, char::len_utf8);
        if ch == Some('\n') {
            self.stack.clear();
            self.stack.push(Mode::Root);
        }
        Token::new(TokenKind::Text, start, self.pos)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.text.len() {
            let mode = self.mode();
            let rest = &self.text[self.pos..];
            let hit = rules::rules(mode).iter().find_map(|rule| {
                if rule.anchors_line_start() && !self.at_line_start() {
                    return None;
                }
                if rule.requires_word_boundary() && !self.at_word_boundary() {
                    return None;
                }
                rule.match_len(rest).map(|len| (rule, len))
            });
            match hit {
                Some((rule, len)) => {
                    let start = self.pos;
                    self.pos += len;
                    match rule.action() {
                        Action::Push(next) => self.stack.push(next),
                        Action::Pop => self.pop_mode(),
                        Action::None => {}
                    }
                    if len > 0 {
                        return Some(Token::new(rule.kind(), start, self.pos));
                    }
                    // zero-width match: mode switch only, keep scanning
                }
                None => match rules::no_match_policy(mode) {
                    NoMatchPolicy::PopAndRetry if self.stack.len() > 1 => self.pop_mode(),
                    _ => return Some(self.fallback_token()),
                },
            }
        }
        None
    }
}

fn is_word(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_alphanumeric() || c == '_')
}
