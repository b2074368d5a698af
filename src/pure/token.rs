//! Token types produced by the Pure scanner.
//!
//! The kind taxonomy mirrors the classification names a highlighting host
//! expects: keywords, comments, numbers, string pieces, prompts, and a
//! catch-all `Text` kind for whitespace and everything the scanner treats
//! as opaque (Pure lets nearly any UTF-8 symbol be an identifier or
//! operator, so those are deliberately left unclassified).

use serde::Serialize;
use std::ops::Range;

/// Classification assigned to a scanned span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Whitespace, identifiers, operators, and anything else left opaque
    Text,
    /// `/* ... */`, may span newlines
    CommentMultiline,
    /// `// ...` up to and including the newline
    CommentSingle,
    /// Shebang line or interactively typed pragma (`#!...`)
    CommentPreproc,
    /// Interactive interpreter prompt (`> `)
    GenericPrompt,
    /// Error-message line prefix (`..., line N: `) in a transcript
    GenericError,
    /// Reserved keyword, including the fixity family
    KeywordReserved,
    /// Primitive type name, or a special bracketed form (`#<...>`)
    KeywordType,
    /// Notable but not reserved (`catch`, `throw`)
    NameBuiltin,
    /// `@`, `;`, `::`
    Punctuation,
    NumberFloat,
    NumberHex,
    NumberOct,
    NumberBin,
    NumberInteger,
    /// String delimiter or ordinary string content
    Str,
    /// Recognized escape sequence inside a string
    StrEscape,
}

impl TokenKind {
    /// Check if this kind is one of the comment classifications
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::CommentMultiline | TokenKind::CommentSingle | TokenKind::CommentPreproc
        )
    }

    /// Check if this kind is one of the numeric literal classifications
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            TokenKind::NumberFloat
                | TokenKind::NumberHex
                | TokenKind::NumberOct
                | TokenKind::NumberBin
                | TokenKind::NumberInteger
        )
    }

    /// Check if this kind belongs to a string literal
    pub fn is_string(&self) -> bool {
        matches!(self, TokenKind::Str | TokenKind::StrEscape)
    }

    /// Check if this kind is a keyword classification
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::KeywordReserved | TokenKind::KeywordType)
    }
}

/// A classified span of the scanned text.
///
/// Offsets are byte positions into the source passed to the scanner; the
/// half-open range `start..end` is non-empty and never overlaps a
/// neighboring token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Byte range of this token in the scanned text
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of the token in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice of the source this token covers
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(TokenKind::CommentSingle.is_comment());
        assert!(TokenKind::CommentMultiline.is_comment());
        assert!(TokenKind::CommentPreproc.is_comment());
        assert!(!TokenKind::Text.is_comment());

        assert!(TokenKind::NumberHex.is_number());
        assert!(TokenKind::NumberFloat.is_number());
        assert!(!TokenKind::Punctuation.is_number());

        assert!(TokenKind::Str.is_string());
        assert!(TokenKind::StrEscape.is_string());
        assert!(!TokenKind::GenericPrompt.is_string());

        assert!(TokenKind::KeywordReserved.is_keyword());
        assert!(TokenKind::KeywordType.is_keyword());
        assert!(!TokenKind::NameBuiltin.is_keyword());
    }

    #[test]
    fn test_token_text_slicing() {
        let source = "let x = 1;";
        let token = Token::new(TokenKind::KeywordReserved, 0, 3);
        assert_eq!(token.text(source), "let");
        assert_eq!(token.span(), 0..3);
        assert_eq!(token.len(), 3);
        assert!(!token.is_empty());
    }
}
