//!
//! FormatterService: resolve the processor for the requested language, merge
//! its fixed parser spec with the user's style options into a printer config,
//! and make a single external printer call. Errors pass through unclassified.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use crate::options::FormatOptions;
use crate::printer::{PrettyPrinter, PrintError, PrinterConfig};
use crate::processor::ParserSpec;
use crate::registry::{LanguageRegistry, RegistryError};

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Printer(#[from] PrintError),
    /// A format call was issued while another one was still in flight.
    #[error("a format request is already in progress")]
    Busy,
}

/// Translate the processor's parser spec plus the user's style options into
/// the external printer's config record. Options the language does not surface
/// are translated anyway; the printer ignores what its parser does not use.
pub fn build_printer_config(spec: ParserSpec, options: &FormatOptions) -> PrinterConfig {
    PrinterConfig {
        parser: spec.parser,
        plugins: spec.plugins,
        print_width: options.max_line_length.columns(),
        use_tabs: options.indent.use_tabs(),
        tab_width: options.indent.width(),
        bracket_same_line: options.brace_style == crate::options::BraceStyle::Collapse,
        semi: options.semi,
        single_quote: options.single_quote,
        trailing_comma: options.trailing_comma.as_str(),
        arrow_parens: options.arrow_parens.as_str(),
        jsx_single_quote: options.jsx_single_quote,
        quote_props: options.quote_props.as_str(),
    }
}

pub struct FormatterService<'r, P: PrettyPrinter> {
    registry: &'r LanguageRegistry,
    printer: P,
    busy: AtomicBool,
}

impl<'r, P: PrettyPrinter> FormatterService<'r, P> {
    pub fn new(registry: &'r LanguageRegistry, printer: P) -> Self {
        FormatterService { registry, printer, busy: AtomicBool::new(false) }
    }

    /// Format `text` under `options`. Takes the source by reference and
    /// returns a new string, so a failed call leaves the caller's buffer
    /// untouched. Overlapping calls are refused with `FormatError::Busy`
    /// rather than racing two printer invocations.
    pub fn format(&self, text: &str, options: &FormatOptions) -> Result<String, FormatError> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(FormatError::Busy);
        }
        let result = self.format_inner(text, options);
        self.busy.store(false, Ordering::SeqCst);
        result
    }

    fn format_inner(&self, text: &str, options: &FormatOptions) -> Result<String, FormatError> {
        let processor = self.registry.resolve(&options.language)?;
        let config = build_printer_config(processor.printer_parser(), options);
        log::debug!(
            "formatting {} chars as {} (parser {})",
            text.len(),
            options.language,
            config.parser
        );
        Ok(self.printer.format(text, &config)?)
    }
}
