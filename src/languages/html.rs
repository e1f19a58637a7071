use lazy_static::lazy_static;
use regex::Regex;

use crate::processor::{DetectionRule, LanguageProcessor, OptionVisibility, ParserSpec, SyntaxMode};

lazy_static! {
    static ref ANY_TAG: Regex = Regex::new(r"(?is)<[a-z].*>").unwrap();
    static ref COMMON_TAG: Regex =
        Regex::new(r"(?i)<(div|span|p|a|img|ul|li|table|form|input|html|head|body|meta)[\s>]")
            .unwrap();
}

fn document_prefix(text: &str) -> bool {
    text.starts_with("<!DOCTYPE") || text.starts_with("<html")
}

/// Generic tag soup, gated on the absence of script tokens so JS containing
/// markup-looking string literals is not misclassified.
fn tag_soup(text: &str) -> bool {
    ANY_TAG.is_match(text)
        && COMMON_TAG.is_match(text)
        && !text.contains("import ")
        && !text.contains("export ")
        && !text.contains("function ")
}

static RULES: &[DetectionRule] = &[
    DetectionRule { priority: 100, matches: document_prefix },
    DetectionRule { priority: 90, matches: tag_soup },
];

#[derive(Debug, Default, Clone)]
pub struct HtmlProcessor;

impl LanguageProcessor for HtmlProcessor {
    fn name(&self) -> &'static str {
        "html"
    }

    fn title(&self) -> &'static str {
        "HTML"
    }

    fn options(&self) -> OptionVisibility {
        OptionVisibility { quote_style: true, ..OptionVisibility::none() }
    }

    fn printer_parser(&self) -> ParserSpec {
        ParserSpec { parser: "html", plugins: &["html"] }
    }

    fn detection_rules(&self) -> &'static [DetectionRule] {
        RULES
    }

    fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode { mode: "html", extensions: &["html", "htm"] }
    }
}
