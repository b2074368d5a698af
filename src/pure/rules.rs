//! Declarative scanning rules for the Pure tokenizer.
//!
//! Each mode owns an ordered table of regex rules. The tables are data, not
//! code: the scanner tries a mode's rules in declaration order and the first
//! match at the current position wins. Order substitutes for longest-match —
//! a bare interactive prompt must beat the opaque-text fallback, and the
//! numeric rules disambiguate float/hex/octal/binary/decimal purely by
//! position in the table.
//!
//! Patterns are compiled once and match against the text remaining at the
//! scan position, so the two anchors that need context to the *left* of the
//! position (line start, word boundary) are carried as rule flags and
//! checked by the scanner against the full text instead of being written
//! into the pattern.

use crate::pure::token::TokenKind;
use crate::pure::vocabulary;
use once_cell::sync::Lazy;
use regex::Regex;

/// Named scanning modes. The scanner keeps these on a stack; `Root` is the
/// default mode and always sits at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Default mode for Pure source and transcripts
    Root,
    /// Inside a double-quoted string body
    String,
    /// Rest of an interactive prompt line, after the `> ` marker
    Prompt,
    /// Rest of an error-message line, after the `..., line N: ` prefix
    Error,
}

/// Mode-stack effect applied after a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Push(Mode),
    Pop,
}

/// What the scanner does when no rule in the current mode matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoMatchPolicy {
    /// Emit a one-character plain-text token and advance past it.
    EmitText,
    /// Pop the mode and re-dispatch at the same position without emitting.
    /// Prompt lines use this to defer unrecognized input to the root rules.
    PopAndRetry,
}

/// One pattern-to-classification rule within a mode's table.
pub struct Rule {
    pattern: Regex,
    kind: TokenKind,
    action: Action,
    at_line_start: bool,
    word_boundary: bool,
}

impl Rule {
    fn new(fragment: &str, kind: TokenKind) -> Self {
        let pattern = Regex::new(&format!(r"\A(?:{fragment})")).unwrap();
        Self {
            pattern,
            kind,
            action: Action::None,
            at_line_start: false,
            word_boundary: false,
        }
    }

    fn push(mut self, mode: Mode) -> Self {
        self.action = Action::Push(mode);
        self
    }

    fn pop(mut self) -> Self {
        self.action = Action::Pop;
        self
    }

    fn line_start(mut self) -> Self {
        self.at_line_start = true;
        self
    }

    fn word_bounded(mut self) -> Self {
        self.word_boundary = true;
        self
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// The rule only applies at offset 0 or right after a newline
    pub fn anchors_line_start(&self) -> bool {
        self.at_line_start
    }

    /// The rule only applies on a word/non-word boundary in the full text
    pub fn requires_word_boundary(&self) -> bool {
        self.word_boundary
    }

    /// Length in bytes of the match at the start of `rest`, if any
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.pattern.find(rest).map(|m| m.end())
    }
}

static ROOT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Whitespace and comments
        Rule::new(r"\s+", TokenKind::Text),
        Rule::new(r"/\*(?s:.*?)\*/", TokenKind::CommentMultiline),
        Rule::new(r"//.*?\n", TokenKind::CommentSingle),
        Rule::new(r"#!.*?\n", TokenKind::CommentPreproc).line_start(),
        // Inline foreign-language code is passed through untokenized
        Rule::new(r"%<(?s:.*?)%>", TokenKind::Text),
        // Interactive prompts and error-message lines; the bare prompt at
        // the end of a snippet must come before the prompt-with-content rule
        Rule::new(r"> ?(?m:$)", TokenKind::GenericPrompt).line_start(),
        Rule::new(r"> ", TokenKind::GenericPrompt)
            .line_start()
            .push(Mode::Prompt),
        Rule::new(r#"[^"\s][^,\n]*, line [0-9]+: "#, TokenKind::GenericError)
            .line_start()
            .push(Mode::Error),
        // Vocabulary words and built-in punctuation
        Rule::new(
            &format!(r"(?:{})\b", vocabulary::alternation(vocabulary::KEYWORDS)),
            TokenKind::KeywordReserved,
        )
        .word_bounded(),
        Rule::new(
            &format!(r"(?:{})\b", vocabulary::alternation(vocabulary::BUILTINS)),
            TokenKind::NameBuiltin,
        )
        .word_bounded(),
        Rule::new(
            &format!(r"(?:{})\b", vocabulary::alternation(vocabulary::PRIMITIVES)),
            TokenKind::KeywordType,
        )
        .word_bounded(),
        Rule::new(r"[@;]|::", TokenKind::Punctuation),
        // Numbers: float wins over the integer forms, hex/octal/binary
        // before plain decimal; a trailing L belongs to the token
        Rule::new(
            r"(?:\d*\.\d+|(?:\d+\.\d*|\.\d+|\d+)[eE][+-]?\d+)\b",
            TokenKind::NumberFloat,
        )
        .word_bounded(),
        Rule::new(r"0[xX][0-9a-fA-F]+L?\b", TokenKind::NumberHex).word_bounded(),
        Rule::new(r"0[0-7]+L?\b", TokenKind::NumberOct).word_bounded(),
        Rule::new(r"0[bB][01]+L?\b", TokenKind::NumberBin).word_bounded(),
        Rule::new(r"\d+L?\b", TokenKind::NumberInteger).word_bounded(),
        // Strings
        Rule::new(r#"""#, TokenKind::Str).push(Mode::String),
        // Specials: thunks, closures, pointers printed by the interpreter
        Rule::new(r"#<[^>\n]+>", TokenKind::KeywordType),
        // Pure allows nearly any UTF-8 symbol in identifiers and operators;
        // everything unrecognized stays opaque text, one character at a time
        Rule::new(r"\S", TokenKind::Text),
    ]
});

static STRING_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(r#"""#, TokenKind::Str).pop(),
        // Named, entity, and parenthesized escapes
        Rule::new(r#"\\(?:[\\abfnrtv"']|&[^;]+;|\([^)]+\))"#, TokenKind::StrEscape),
        // Numeric escapes: hex, octal, binary, decimal
        Rule::new(
            r"\\(?:0x[0-9a-fA-F]+|0[0-7]+|0[bB][01]+|\d+)",
            TokenKind::StrEscape,
        ),
        // Run of ordinary characters
        Rule::new(r#"[^\\"\n]+"#, TokenKind::Str),
        // Line continuation
        Rule::new("\\\\\n", TokenKind::Str),
        // Stray backslash
        Rule::new(r"\\", TokenKind::Str),
    ]
});

static PROMPT_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Interactive interpreter commands; the whole line stays unhighlighted
        Rule::new(
            &format!(
                r"(?:{})\b.*?\n",
                vocabulary::alternation(vocabulary::COMMANDS)
            ),
            TokenKind::Text,
        )
        .pop(),
        // Interactively typed pragmas
        Rule::new(r"#!.*?\n", TokenKind::CommentPreproc).pop(),
        // Anything else falls through to the root rules via PopAndRetry
    ]
});

static ERROR_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    // The message after the recognized prefix is consumed as one plain line
    vec![Rule::new(r".*?\n", TokenKind::Text).pop()]
});

/// Rule table for a mode, in priority order
pub fn rules(mode: Mode) -> &'static [Rule] {
    match mode {
        Mode::Root => &ROOT_RULES,
        Mode::String => &STRING_RULES,
        Mode::Prompt => &PROMPT_RULES,
        Mode::Error => &ERROR_RULES,
    }
}

/// Fallback behavior when nothing in the mode's table matches
pub fn no_match_policy(mode: Mode) -> NoMatchPolicy {
    match mode {
        Mode::Prompt => NoMatchPolicy::PopAndRetry,
        _ => NoMatchPolicy::EmitText,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        assert_eq!(rules(Mode::Root).len(), 20);
        assert_eq!(rules(Mode::String).len(), 6);
        assert_eq!(rules(Mode::Prompt).len(), 2);
        assert_eq!(rules(Mode::Error).len(), 1);
    }

    #[test]
    fn test_match_len_is_anchored_at_start() {
        let rule = &rules(Mode::Root)[0]; // whitespace
        assert_eq!(rule.match_len("  x"), Some(2));
        assert_eq!(rule.match_len("x  "), None);
    }

    #[test]
    fn test_numeric_rules_require_word_boundary() {
        for rule in rules(Mode::Root) {
            if rule.kind().is_number() {
                assert!(rule.requires_word_boundary());
            }
        }
    }

    #[test]
    fn test_line_anchored_rules() {
        let anchored: Vec<TokenKind> = rules(Mode::Root)
            .iter()
            .filter(|r| r.anchors_line_start())
            .map(|r| r.kind())
            .collect();
        assert_eq!(
            anchored,
            vec![
                TokenKind::CommentPreproc,
                TokenKind::GenericPrompt,
                TokenKind::GenericPrompt,
                TokenKind::GenericError,
            ]
        );
    }

    #[test]
    fn test_prompt_mode_defers_instead_of_degrading() {
        assert_eq!(no_match_policy(Mode::Prompt), NoMatchPolicy::PopAndRetry);
        assert_eq!(no_match_policy(Mode::Root), NoMatchPolicy::EmitText);
        assert_eq!(no_match_policy(Mode::String), NoMatchPolicy::EmitText);
        assert_eq!(no_match_policy(Mode::Error), NoMatchPolicy::EmitText);
    }

    #[test]
    fn test_string_close_pops_and_open_pushes() {
        let open = &rules(Mode::Root)[17];
        assert_eq!(open.kind(), TokenKind::Str);
        assert_eq!(open.action(), Action::Push(Mode::String));

        let close = &rules(Mode::String)[0];
        assert_eq!(close.kind(), TokenKind::Str);
        assert_eq!(close.action(), Action::Pop);
    }
}
