//! Check command implementation.
//!
//! Lexes many files on a worker pool and reports, per file, either the
//! token count or the rendered diagnostic of the first lex error.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crossl_lex::{Dialect, Lexer};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::commands::common::{error_messages, read_source, render_lex_error, resolve_dialect};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{CheckConfig, Config};
use crate::error::{CrossltError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Dialect name, overriding the configuration.
    pub dialect: Option<String>,
    /// Number of parallel jobs, overriding the configuration.
    pub jobs: Option<u32>,
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    /// The file lexed; `tokens` excludes the final `Eof`.
    Clean { path: PathBuf, tokens: usize },
    /// Lexing stopped at an error, rendered with its source line.
    Failed { path: PathBuf, diagnostic: String },
    /// The file could not be read.
    Unreadable { path: PathBuf, error: String },
}

impl FileReport {
    /// True unless the file lexed cleanly.
    pub fn is_failure(&self) -> bool {
        !matches!(self, FileReport::Clean { .. })
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Use settings from a loaded configuration file.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Get the effective check configuration.
    pub fn get_check_config(&self) -> CheckConfig {
        let mut config = self.config.check.clone();

        if let Some(jobs) = self.args.jobs {
            config.jobs = jobs;
        }

        config
    }

    /// Execute the command, writing to stdout and stderr.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_to(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Execute the command.
    ///
    /// Clean files are reported on `out` as `path: N tokens`; diagnostics
    /// go to `err`. Fails if any file failed.
    pub fn run_to<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<()> {
        let start_time = Instant::now();
        let reports = self.check_files()?;

        for report in &reports {
            match report {
                FileReport::Clean { path, tokens } => {
                    writeln!(out, "{}: {} tokens", path.display(), tokens)?
                },
                FileReport::Failed { diagnostic, .. } => writeln!(err, "{}", diagnostic)?,
                FileReport::Unreadable { path, error } => {
                    writeln!(err, "{}: {}", path.display(), error)?
                },
            }
        }

        let failed = reports.iter().filter(|r| r.is_failure()).count();
        info!(
            files = reports.len(),
            failed,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "check finished"
        );

        if failed > 0 {
            return Err(CrossltError::Validation(format!(
                "{} {}",
                failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(())
    }

    /// Lex every input file on a pool of `jobs` threads.
    ///
    /// Reports come back in input order.
    pub fn check_files(&self) -> Result<Vec<FileReport>> {
        if self.args.files.is_empty() {
            return Err(CrossltError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let dialect =
            resolve_dialect(self.args.dialect.as_deref().unwrap_or(&self.config.lex.dialect))?;
        let jobs = self.get_check_config().jobs as usize;
        debug!(files = self.args.files.len(), jobs, dialect = dialect.name, "checking");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build()
            .map_err(|e| CrossltError::Config(format!("Failed to start worker pool: {}", e)))?;

        Ok(pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| check_file(path, dialect))
                .collect()
        }))
    }
}

fn check_file(path: &Path, dialect: &'static Dialect) -> FileReport {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            return FileReport::Unreadable {
                path: path.to_path_buf(),
                error: e.to_string(),
            }
        },
    };

    match Lexer::new(&source, dialect).tokenize() {
        Ok(tokens) => FileReport::Clean {
            path: path.to_path_buf(),
            tokens: tokens.len() - 1,
        },
        Err(e) => FileReport::Failed {
            path: path.to_path_buf(),
            diagnostic: render_lex_error(path, &source, e),
        },
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
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
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Check that shader sources lex cleanly"
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    CheckCommand::new(args).with_config(config).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_shader(dir: &TempDir, name: &str, source: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, source).unwrap();
        path
    }

    fn args(files: Vec<PathBuf>) -> CheckArgs {
        CheckArgs {
            files,
            jobs: Some(2),
            ..CheckArgs::default()
        }
    }

    #[test]
    fn test_check_clean_files() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_shader(&temp_dir, "a.hlsl", "float4 c : COLOR;");
        let b = write_shader(&temp_dir, "b.hlsl", "// nothing\n");

        let mut out = Vec::new();
        let mut err = Vec::new();
        CheckCommand::new(args(vec![a, b]))
            .run_to(&mut out, &mut err)
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("a.hlsl: 5 tokens"));
        assert!(lines[1].ends_with("b.hlsl: 0 tokens"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_check_reports_in_input_order() {
        let temp_dir = TempDir::new().unwrap();
        let files: Vec<PathBuf> = (0..16)
            .map(|i| write_shader(&temp_dir, &format!("s{}.hlsl", i), &"x;".repeat(i)))
            .collect();

        let reports = CheckCommand::new(args(files.clone())).check_files().unwrap();
        for (i, (report, path)) in reports.iter().zip(&files).enumerate() {
            assert_eq!(
                *report,
                FileReport::Clean {
                    path: path.clone(),
                    tokens: 2 * i
                }
            );
        }
    }

    #[test]
    fn test_check_failure_renders_diagnostic() {
        let temp_dir = TempDir::new().unwrap();
        let good = write_shader(&temp_dir, "good.hlsl", "x;");
        let bad = write_shader(&temp_dir, "bad.hlsl", "s = \"open\n");

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = CheckCommand::new(args(vec![good, bad])).run_to(&mut out, &mut err);

        match result {
            Err(CrossltError::Validation(msg)) => assert_eq!(msg, "1 file(s) failed to lex"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
        assert!(String::from_utf8(out).unwrap().contains("good.hlsl: 2 tokens"));
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("error[E1002]: unterminated string literal"));
        assert!(err.contains("bad.hlsl:1:5"));
    }

    #[test]
    fn test_check_missing_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.hlsl");

        let reports = CheckCommand::new(args(vec![missing])).check_files().unwrap();
        assert!(matches!(reports[0], FileReport::Unreadable { .. }));
        assert!(reports[0].is_failure());
    }

    #[test]
    fn test_check_jobs_override() {
        let mut config = Config::default();
        config.check.jobs = 7;

        let command = CheckCommand::new(CheckArgs::default()).with_config(config.clone());
        assert_eq!(command.get_check_config().jobs, 7);

        let command = CheckCommand::new(args(Vec::new())).with_config(config);
        assert_eq!(command.get_check_config().jobs, 2);
    }

    #[test]
    fn test_check_no_input() {
        let result = CheckCommand::new(CheckArgs::default()).check_files();
        assert!(matches!(result, Err(CrossltError::Validation(_))));
    }

    #[test]
    fn test_check_command_name() {
        assert_eq!(<CheckCommand as Command>::name(), "check");
        assert_eq!(CheckCommand::description(), "Check that shader sources lex cleanly");
    }
}
