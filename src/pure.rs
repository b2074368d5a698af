//! Tokenizer for the Pure language.
//!
//!     Pure source is scanned by an ordered table of regex rules partitioned
//!     into named modes. The scanner owns a small mode stack: specialized
//!     sub-modes (quoted-string bodies, interactive prompt lines, error
//!     message lines) are pushed on entry and popped on completion, and the
//!     default mode resumes underneath. Rules within a mode are tried in
//!     declaration order and the first match wins; priority order stands in
//!     for longest-match on purpose, so that short patterns like a bare
//!     interactive prompt beat the opaque-text fallback.
//!
//! Module map
//!
//!     Vocabularies:
//!         Static keyword, builtin, primitive-type, and interactive-command
//!         word lists, consulted by the default-mode rules through a single
//!         compiled alternation. See [vocabulary](vocabulary).
//!
//!     Rules:
//!         The per-mode declarative rule tables, compiled once. See
//!         [rules](rules).
//!
//!     Scanner:
//!         The mode-stack driver. Produces a lazy, finite token stream that
//!         covers every character of the input, whitespace included. See
//!         [scanner](scanner).
//!
//!     Registry:
//!         Discovery metadata (language id, aliases, filename globs, MIME
//!         types) and lookup for host highlighting frameworks. Carries no
//!         scanning behavior. See [registry](registry).

pub mod registry;
pub mod rules;
pub mod scanner;
pub mod testing;
pub mod token;
pub mod vocabulary;

pub use scanner::{scan, tokenize, Scanner};
pub use token::{Token, TokenKind};
