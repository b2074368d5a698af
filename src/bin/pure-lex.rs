//! Command-line interface for pure-lex
//! This binary dumps the token stream the scanner produces for a Pure
//! source file or interactive-session transcript.
//!
//! Usage:
//!   pure-lex tokens `<path>` [--format `<format>`]  - Print the token stream
//!   pure-lex languages                          - List registered languages

use clap::{Arg, Command};
use pure_lex::pure::registry::LanguageRegistry;
use pure_lex::pure::scanner::tokenize;
use pure_lex::pure::token::TokenKind;
use serde::Serialize;

fn main() {
    let matches = Command::new("pure-lex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Pure source files as token streams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Tokenize a Pure source file")
                .arg(
                    Arg::new("path")
                        .help("Path to the Pure file to tokenize")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('plain' or 'json')")
                        .default_value("plain"),
                ),
        )
        .subcommand(Command::new("languages").about("List registered languages"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            let format = tokens_matches.get_one::<String>("format").unwrap();
            handle_tokens_command(path, format);
        }
        Some(("languages", _)) => {
            handle_languages_command();
        }
        _ => unreachable!(),
    }
}

/// One token of the dump, with its text resolved for display
#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    start: usize,
    end: usize,
    text: &'a str,
}

/// Handle the tokens command
fn handle_tokens_command(path: &str, format: &str) {
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    });

    let records: Vec<TokenRecord<'_>> = tokenize(&source)
        .iter()
        .map(|t| TokenRecord {
            kind: t.kind,
            start: t.start,
            end: t.end,
            text: t.text(&source),
        })
        .collect();

    match format {
        "plain" => {
            for record in &records {
                println!(
                    "{:>5}..{:<5} {:<16} {:?}",
                    record.start,
                    record.end,
                    format!("{:?}", record.kind),
                    record.text
                );
            }
        }
        "json" => {
            let output = serde_json::to_string_pretty(&records).unwrap_or_else(|e| {
                eprintln!("Serialization error: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Unknown format: {}", other);
            std::process::exit(1);
        }
    }
}

/// Handle the languages command
fn handle_languages_command() {
    let registry = LanguageRegistry::with_builtin();
    for id in registry.available_languages() {
        if let Some(language) = registry.get(id) {
            println!("{} ({})", language.id, language.name);
            println!("  aliases:   {}", language.aliases.join(", "));
            println!("  filenames: {}", language.filenames.join(", "));
            println!("  mimetypes: {}", language.mimetypes.join(", "));
        }
    }
}
