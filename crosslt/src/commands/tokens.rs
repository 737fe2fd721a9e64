//! Tokens command implementation.
//!
//! Lexes each input file and prints its token stream, either as text
//! lines or as JSON.

use std::io::{self, Write};
use std::path::PathBuf;

use crossl_lex::{Dialect, Lexer, Token};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{
    error_messages, read_source, render_lex_error, resolve_dialect, OutputFormat,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{CrossltError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Output format, overriding the configuration.
    pub format: Option<String>,
    /// Dialect name, overriding the configuration.
    pub dialect: Option<String>,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.name(),
            lexeme: token.lexeme,
            start: token.span.start,
            end: token.span.end,
            line: token.line(),
            column: token.column(),
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Use settings from a loaded configuration file.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Execute the command, writing to stdout.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Execute the command, writing the token dump to `out`.
    ///
    /// Stops at the first file that fails to lex; its diagnostic goes to
    /// stderr.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(CrossltError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let format = self.output_format()?;
        let dialect = self.dialect()?;
        let headers = format == OutputFormat::Text && self.args.files.len() > 1;

        for path in &self.args.files {
            let source = read_source(path)?;
            let tokens = match Lexer::new(&source, dialect).tokenize() {
                Ok(tokens) => tokens,
                Err(err) => {
                    eprintln!("{}", render_lex_error(path, &source, err));
                    return Err(CrossltError::Validation(format!(
                        "{} {}",
                        error_messages::LEX_FAILED,
                        path.display()
                    )));
                },
            };
            debug!(path = %path.display(), tokens = tokens.len(), "lexed file");

            if headers {
                writeln!(out, "==> {} <==", path.display())?;
            }
            match format {
                OutputFormat::Text => write_text(out, &tokens)?,
                OutputFormat::Json => write_json(out, &tokens)?,
            }
        }
        Ok(())
    }

    /// Resolve the output format from arguments, then configuration.
    fn output_format(&self) -> Result<OutputFormat> {
        if let Some(ref name) = self.args.format {
            return OutputFormat::from_name(name).ok_or_else(|| {
                CrossltError::Validation(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
            });
        }

        let name = &self.config.output.format;
        OutputFormat::from_name(name).ok_or_else(|| {
            CrossltError::Config(format!("{} {}", error_messages::UNKNOWN_FORMAT, name))
        })
    }

    fn dialect(&self) -> Result<&'static Dialect> {
        resolve_dialect(self.args.dialect.as_deref().unwrap_or(&self.config.lex.dialect))
    }
}

fn write_text<W: Write>(out: &mut W, tokens: &[Token<'_>]) -> Result<()> {
    for token in tokens {
        if token.lexeme.is_empty() {
            writeln!(out, "{}:{} {}", token.line(), token.column(), token.kind.name())?;
        } else {
            writeln!(
                out,
                "{}:{} {} {}",
                token.line(),
                token.column(),
                token.kind.name(),
                token.lexeme
            )?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, tokens: &[Token<'_>]) -> Result<()> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self {
            args,
            config: Config::default(),
        }
    }

    fn execute(&self) -> Result<Self::Output> {
        debug!(command = Self::name(), description = Self::description(), "running");
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the token stream of shader sources"
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    TokensCommand::new(args).with_config(config).execute()
}
