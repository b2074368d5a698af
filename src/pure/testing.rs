//! Assertion helpers shared by the scanner test suites.
//!
//! The helpers keep scanner tests focused on classification: collect kinds
//! or `(kind, text)` pairs, drop whitespace noise, and check the tiling
//! invariant (every byte of the input belongs to exactly one token).

use crate::pure::token::{Token, TokenKind};

/// Collect just the kinds of a token stream
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

/// Collect `(kind, text)` pairs for every token
pub fn spans<'a>(source: &'a str, tokens: &[Token]) -> Vec<(TokenKind, &'a str)> {
    tokens.iter().map(|t| (t.kind, t.text(source))).collect()
}

/// Like [`spans`], but with whitespace-only text tokens dropped
pub fn significant<'a>(source: &'a str, tokens: &[Token]) -> Vec<(TokenKind, &'a str)> {
    spans(source, tokens)
        .into_iter()
        .filter(|(kind, text)| !(*kind == TokenKind::Text && text.trim().is_empty()))
        .collect()
}

/// Assert the tokens tile `source` exactly: contiguous, in order, no gaps,
/// no overlaps, no empty spans.
pub fn assert_covers(source: &str, tokens: &[Token]) {
    let mut pos = 0;
    for token in tokens {
        assert_eq!(
            token.start, pos,
            "gap or overlap at byte {pos}: next token is {token:?}"
        );
        assert!(token.end > token.start, "empty token at byte {pos}");
        pos = token.end;
    }
    assert_eq!(
        pos,
        source.len(),
        "tokens stop at byte {pos} but the source has {} bytes",
        source.len()
    );
}
