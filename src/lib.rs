//! # pure-lex
//!
//! A tokenizer for the Pure programming language.
//!
//! The crate classifies Pure source text (or a transcript of an interactive
//! Pure session) into a stream of lexical tokens for syntax highlighting.
//! It does not parse Pure into an AST and does not model Pure's real
//! grammar; unrecognized input degrades to plain text instead of failing.
//!
//! ## Testing
//!
//! Scanner behavior is covered by colocated unit tests plus the integration
//! and property suites under `tests/`. Shared assertion helpers live in the
//! [testing module](pure::testing).

pub mod pure;

pub use pure::registry::{LanguageMetadata, LanguageRegistry};
pub use pure::scanner::{scan, tokenize, Scanner};
pub use pure::token::{Token, TokenKind};
