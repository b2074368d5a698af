//! Language registration metadata for host highlighting frameworks.
//!
//! This is pure glue for discovery: a host looks a language up by id,
//! alias, or filename and gets back the metadata plus the scanner entry
//! point. Nothing in the scanner depends on these values.

use crate::pure::scanner::Scanner;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during registry lookups
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Language not found in registry
    UnknownLanguage(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownLanguage(name) => write!(f, "Language '{name}' not registered"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Discovery metadata for one registered language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageMetadata {
    /// Unique identifier used by hosts
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Alternative lookup names
    pub aliases: &'static [&'static str],
    /// Filename globs (`*.ext` or exact names)
    pub filenames: &'static [&'static str],
    /// MIME types served by this language
    pub mimetypes: &'static [&'static str],
    /// Entry point a host calls to scan a buffer
    pub scanner: for<'a> fn(&'a str) -> Scanner<'a>,
}

/// The Pure language descriptor
pub const PURE: LanguageMetadata = LanguageMetadata {
    id: "pure",
    name: "Pure",
    aliases: &["pure"],
    filenames: &["*.pure"],
    mimetypes: &["text/x-pure"],
    scanner: crate::pure::scanner::scan,
};

/// Registry of scannable languages
///
/// Provides a centralized lookup for all registered languages. Hosts can
/// resolve a scanner by id, alias, or filename.
pub struct LanguageRegistry {
    languages: HashMap<&'static str, LanguageMetadata>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        LanguageRegistry {
            languages: HashMap::new(),
        }
    }

    /// Create a registry with the built-in languages registered
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(PURE);
        registry
    }

    /// Register a language
    ///
    /// If a language with the same id already exists, it will be replaced.
    pub fn register(&mut self, language: LanguageMetadata) {
        self.languages.insert(language.id, language);
    }

    /// Get a language by exact id
    pub fn get(&self, id: &str) -> Option<&LanguageMetadata> {
        self.languages.get(id)
    }

    /// Check if a language id is registered
    pub fn has(&self, id: &str) -> bool {
        self.languages.contains_key(id)
    }

    /// Look a language up by id or alias
    pub fn lookup(&self, name: &str) -> Result<&LanguageMetadata, RegistryError> {
        self.languages
            .values()
            .find(|l| l.id == name || l.aliases.contains(&name))
            .ok_or_else(|| RegistryError::UnknownLanguage(name.to_string()))
    }

    /// Find the language whose filename patterns match `filename`
    pub fn for_filename(&self, filename: &str) -> Option<&LanguageMetadata> {
        self.languages
            .values()
            .find(|l| l.filenames.iter().any(|g| glob_matches(g, filename)))
    }

    /// All registered language ids, sorted
    pub fn available_languages(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.languages.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

/// Match a filename against a `*`-prefixed suffix glob or an exact name
fn glob_matches(pattern: &str, filename: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => filename.ends_with(suffix),
        None => filename == pattern,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pure::token::TokenKind;

    #[test]
    fn test_pure_metadata() {
        assert_eq!(PURE.id, "pure");
        assert_eq!(PURE.name, "Pure");
        assert_eq!(PURE.aliases, &["pure"]);
        assert_eq!(PURE.filenames, &["*.pure"]);
        assert_eq!(PURE.mimetypes, &["text/x-pure"]);
    }

    #[test]
    fn test_lookup_by_id_and_alias() {
        let registry = LanguageRegistry::with_builtin();
        assert!(registry.has("pure"));
        assert_eq!(registry.lookup("pure").map(|l| l.name), Ok("Pure"));
        assert!(registry.get("pure").is_some());
    }

    #[test]
    fn test_lookup_unknown_language() {
        let registry = LanguageRegistry::with_builtin();
        let err = registry.lookup("fortran").unwrap_err();
        assert_eq!(err, RegistryError::UnknownLanguage("fortran".to_string()));
        assert_eq!(err.to_string(), "Language 'fortran' not registered");
    }

    #[test]
    fn test_filename_resolution() {
        let registry = LanguageRegistry::default();
        assert!(registry.for_filename("fact.pure").is_some());
        assert!(registry.for_filename("lib/prelude.pure").is_some());
        assert!(registry.for_filename("fact.rs").is_none());
    }

    #[test]
    fn test_scanner_entry_point() {
        let registry = LanguageRegistry::with_builtin();
        let language = registry.lookup("pure").unwrap();
        let tokens: Vec<_> = (language.scanner)("let").collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::KeywordReserved);
    }

    #[test]
    fn test_available_languages() {
        assert_eq!(
            LanguageRegistry::with_builtin().available_languages(),
            vec!["pure"]
        );
        assert!(LanguageRegistry::new().available_languages().is_empty());
    }
}
