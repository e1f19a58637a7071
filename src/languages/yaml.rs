use lazy_static::lazy_static;
use regex::Regex;

use crate::processor::{DetectionRule, LanguageProcessor, OptionVisibility, ParserSpec, SyntaxMode};

lazy_static! {
    static ref YAML_KEY: Regex = Regex::new(r"^\s*[\w.-]+\s*:(\s|$)").unwrap();
    static ref YAML_BLOCK_SCALAR: Regex = Regex::new(r":\s*[|>][+-]?\s*$").unwrap();
    static ref YAML_ANCHOR_TOKEN: Regex = Regex::new(r"(^|\s)(&\w+|\*\w+|!!?\w+)").unwrap();
    static ref MARKUP_PREFIX: Regex = Regex::new(r"<[a-zA-Z!/]").unwrap();
}

/// Deliberately conservative: all four conditions must hold, so prose, CSS and
/// code with stray colons never land here. The anchor/alias/tag requirement is
/// the load-bearing one.
fn yaml_document(text: &str) -> bool {
    if text.starts_with('"') || text.starts_with('\'') {
        return false;
    }
    if MARKUP_PREFIX.is_match(text)
        || text.contains("import ")
        || text.contains("export ")
        || text.contains("function ")
        || text.starts_with("class ")
    {
        return false;
    }
    let has_shape = text.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        YAML_KEY.is_match(line)
            || trimmed == "-"
            || trimmed.starts_with("- ")
            || YAML_BLOCK_SCALAR.is_match(line)
            || line.starts_with("  ")
    });
    has_shape && YAML_ANCHOR_TOKEN.is_match(text)
}

static RULES: &[DetectionRule] = &[DetectionRule { priority: 70, matches: yaml_document }];

#[derive(Debug, Default, Clone)]
pub struct YamlProcessor;

impl LanguageProcessor for YamlProcessor {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn title(&self) -> &'static str {
        "YAML"
    }

    fn options(&self) -> OptionVisibility {
        OptionVisibility::none()
    }

    fn printer_parser(&self) -> ParserSpec {
        ParserSpec { parser: "yaml", plugins: &[] }
    }

    fn detection_rules(&self) -> &'static [DetectionRule] {
        RULES
    }

    fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode { mode: "yaml", extensions: &["yaml", "yml"] }
    }
}
