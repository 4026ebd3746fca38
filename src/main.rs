//! scanlet CLI
//!
//! Reads a source file, scans it, and prints one line per token up to and
//! including EOF. Illegal characters are reported on stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{info, warn};

use scanlet::{
    Diagnostic, OperatorSet, RangeKeyword, ScanError, ScanResult, Scanner, ScannerConfig, Token,
};

#[derive(Debug, Parser)]
#[command(name = "scanlet", version, about = "Print the token stream of a source file")]
struct Cli {
    /// Source file to scan
    #[arg(default_value = "data.txt")]
    file: PathBuf,

    /// Spelling of the range keyword (btwn or through)
    #[arg(long, default_value_t = RangeKeyword::Btwn, env = "SCANLET_RANGE_KEYWORD")]
    range_keyword: RangeKeyword,

    /// Recognise `- * / : [ ] < >` as single-character operators
    #[arg(long)]
    extended_operators: bool,

    /// Fail if any illegal characters are found
    #[arg(long)]
    deny_illegal: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence logging
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn scanner_config(&self) -> ScannerConfig {
        let operators = if self.extended_operators {
            OperatorSet::Extended
        } else {
            OperatorSet::Core
        };
        ScannerConfig::new()
            .with_range_keyword(self.range_keyword)
            .with_operators(operators)
    }
}

fn main() {
    let cli = Cli::parse();

    // Warnings are shown unless -q is given
    if let Err(e) = stderrlog::new()
        .module(module_path!())
        .quiet(cli.quiet)
        .verbosity(usize::from(cli.verbose) + 1)
        .init()
    {
        eprintln!("Failed to initialise logging: {}", e);
    }

    if let Err(e) = show_file_tokens(&cli.file, cli.scanner_config(), cli.deny_illegal) {
        eprint!("{}", Diagnostic::new(&e));
        process::exit(1);
    }
}

/// Scan a file and print its tokens
fn show_file_tokens(path: &Path, config: ScannerConfig, deny_illegal: bool) -> ScanResult<()> {
    let source = fs::read_to_string(path).map_err(|e| ScanError::io(path, e))?;
    info!("scanning '{}' ({} bytes)", path.display(), source.len());

    let tokens = Scanner::with_config(source, config).tokenize();
    for token in &tokens {
        println!("{}", format_token(token));
    }

    let diagnostics = Diagnostic::for_illegal_tokens(&tokens);
    for diagnostic in &diagnostics {
        eprint!("{}", diagnostic);
    }

    if diagnostics.is_empty() {
        return Ok(());
    }
    if deny_illegal {
        return Err(ScanError::illegal_characters(diagnostics.len()));
    }
    warn!("{} illegal character(s) in '{}'", diagnostics.len(), path.display());
    Ok(())
}

fn format_token(token: &Token) -> String {
    format!("Token: Type=  ({})   , Literal=  ({})", token.kind, token.literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use scanlet::TokenKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "scanlet",
            "prog.txt",
            "--range-keyword",
            "through",
            "--extended-operators",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.file, PathBuf::from("prog.txt"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.scanner_config(),
            ScannerConfig::new()
                .with_range_keyword(RangeKeyword::Through)
                .with_operators(OperatorSet::Extended)
        );
    }

    #[test]
    fn test_cli_rejects_unknown_range_keyword() {
        let result = Cli::try_parse_from(["scanlet", "--range-keyword", "between"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_token() {
        assert_eq!(
            format_token(&Token::new(TokenKind::Let, "let")),
            "Token: Type=  (LET)   , Literal=  (let)"
        );
        assert_eq!(format_token(&Token::eof()), "Token: Type=  (EOF)   , Literal=  ()");
    }

    #[test]
    fn test_missing_file() {
        let err = show_file_tokens(
            Path::new("definitely/not/here.txt"),
            ScannerConfig::default(),
            false,
        )
        .unwrap_err();
        assert_eq!(err.kind(), "I/O Error");
    }
}
