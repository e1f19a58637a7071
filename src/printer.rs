//!
//! The boundary to the external pretty-printer. The core never formats text
//! itself: it builds a `PrinterConfig` and hands it, with the source, to a
//! `PrettyPrinter` implementation. `CommandPrinter` is the stock backend and
//! pipes the source through a prettier-compatible command.

use std::io::Write;
use std::process::{Command, Stdio};

use serde::Serialize;
use thiserror::Error;

/// The external formatter's full option record, passed verbatim on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrinterConfig {
    pub parser: &'static str,
    pub plugins: &'static [&'static str],
    pub print_width: u32,
    pub use_tabs: bool,
    pub tab_width: u8,
    pub bracket_same_line: bool,
    pub semi: bool,
    pub single_quote: bool,
    pub trailing_comma: &'static str,
    pub arrow_parens: &'static str,
    pub jsx_single_quote: bool,
    pub quote_props: &'static str,
}

#[derive(Debug, Error)]
pub enum PrintError {
    /// The printer rejected the input; the message is its diagnostic, passed
    /// through unchanged.
    #[error("{0}")]
    Rejected(String),
    #[error("failed to run printer command `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// The opaque third-party formatting capability: one call, no retry, failures
/// surface as-is.
pub trait PrettyPrinter: Send + Sync {
    fn format(&self, source: &str, config: &PrinterConfig) -> Result<String, PrintError>;
}

/// Backend that spawns an external prettier-compatible command, translating
/// the config record to CLI flags and piping the source over stdin.
#[derive(Debug, Clone)]
pub struct CommandPrinter {
    program: String,
    base_args: Vec<String>,
}

impl CommandPrinter {
    /// `command` is split on whitespace: first token is the program, the rest
    /// become leading arguments (supports e.g. "npx prettier").
    pub fn new(command: &str) -> Self {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().unwrap_or_else(|| "prettier".to_string());
        CommandPrinter { program, base_args: parts.collect() }
    }

    fn flag_args(config: &PrinterConfig) -> Vec<String> {
        // Plugin handles are not forwarded: the stock prettier CLI bundles the
        // plugins its built-in parsers need.
        let mut args = vec![
            "--parser".to_string(),
            config.parser.to_string(),
            "--print-width".to_string(),
            config.print_width.to_string(),
            "--tab-width".to_string(),
            config.tab_width.to_string(),
            "--trailing-comma".to_string(),
            config.trailing_comma.to_string(),
            "--arrow-parens".to_string(),
            config.arrow_parens.to_string(),
            "--quote-props".to_string(),
            config.quote_props.to_string(),
        ];
        args.push(if config.use_tabs { "--use-tabs" } else { "--no-use-tabs" }.to_string());
        args.push(if config.semi { "--semi" } else { "--no-semi" }.to_string());
        args.push(
            if config.single_quote { "--single-quote" } else { "--no-single-quote" }.to_string(),
        );
        if config.jsx_single_quote {
            args.push("--jsx-single-quote".to_string());
        }
        if config.bracket_same_line {
            args.push("--bracket-same-line".to_string());
        }
        args
    }
}

impl PrettyPrinter for CommandPrinter {
    fn format(&self, source: &str, config: &PrinterConfig) -> Result<String, PrintError> {
        let io_error = |source: std::io::Error| PrintError::Io {
            command: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.base_args)
            .args(Self::flag_args(config))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(io_error)?;

        if let Some(stdin) = child.stdin.as_mut() {
            // A printer that fails fast may close stdin before the source is
            // fully written; its exit status carries the real diagnostic.
            if let Err(err) = stdin.write_all(source.as_bytes()) {
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(io_error(err));
                }
            }
        }
        let output = child.wait_with_output().map_err(io_error)?;

        if output.status.success() {
            String::from_utf8(output.stdout)
                .map_err(|e| PrintError::Rejected(format!("printer produced invalid UTF-8: {e}")))
        } else {
            let diagnostic = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("printer command exited with {}: {diagnostic}", output.status);
            Err(PrintError::Rejected(diagnostic))
        }
    }
}
