use lazy_static::lazy_static;
use regex::Regex;

use crate::processor::{DetectionRule, LanguageProcessor, OptionVisibility, ParserSpec, SyntaxMode};

lazy_static! {
    static ref CSS_SELECTOR_PREFIX: Regex = Regex::new(r"^[.#]?[\w-]+\s*\{").unwrap();
}

fn file_suffix(text: &str) -> bool {
    text.contains(".css")
}

fn stylesheet_syntax(text: &str) -> bool {
    CSS_SELECTOR_PREFIX.is_match(text) || text.contains("@media") || text.contains("@keyframes")
}

static RULES: &[DetectionRule] = &[
    DetectionRule { priority: 90, matches: file_suffix },
    DetectionRule { priority: 80, matches: stylesheet_syntax },
];

#[derive(Debug, Default, Clone)]
pub struct CssProcessor;

impl LanguageProcessor for CssProcessor {
    fn name(&self) -> &'static str {
        "css"
    }

    fn title(&self) -> &'static str {
        "CSS"
    }

    fn options(&self) -> OptionVisibility {
        OptionVisibility::none()
    }

    fn printer_parser(&self) -> ParserSpec {
        ParserSpec { parser: "css", plugins: &["postcss"] }
    }

    fn detection_rules(&self) -> &'static [DetectionRule] {
        RULES
    }

    fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode { mode: "css", extensions: &["css"] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_prefix_matches() {
        let p = CssProcessor;
        assert_eq!(p.priority(".button { color: red }"), Some(80));
        assert_eq!(p.priority("#header { margin: 0 }"), Some(80));
        assert_eq!(p.priority("body { font-size: 14px }"), Some(80));
    }

    #[test]
    fn at_rules_match() {
        let p = CssProcessor;
        assert_eq!(p.priority("@media (max-width: 600px) { }"), Some(80));
        assert_eq!(p.priority("@keyframes spin { }"), Some(80));
    }

    #[test]
    fn file_mention_outranks_syntax() {
        assert_eq!(CssProcessor.priority("styles.css"), Some(90));
    }

    #[test]
    fn selector_must_be_at_the_start() {
        assert_eq!(CssProcessor.priority("the .button { rule"), None);
    }
}
