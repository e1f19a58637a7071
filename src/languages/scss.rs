use lazy_static::lazy_static;
use regex::Regex;

use crate::processor::{DetectionRule, LanguageProcessor, OptionVisibility, ParserSpec, SyntaxMode};

lazy_static! {
    static ref SCSS_VARIABLE_PREFIX: Regex = Regex::new(r"^\$[\w-]+:").unwrap();
}

fn file_suffix(text: &str) -> bool {
    text.contains(".scss")
}

fn scss_syntax(text: &str) -> bool {
    text.contains("@use")
        || text.contains("@mixin")
        || text.contains("@include")
        || SCSS_VARIABLE_PREFIX.is_match(text)
}

static RULES: &[DetectionRule] = &[
    DetectionRule { priority: 90, matches: file_suffix },
    DetectionRule { priority: 80, matches: scss_syntax },
];

#[derive(Debug, Default, Clone)]
pub struct ScssProcessor;

impl LanguageProcessor for ScssProcessor {
    fn name(&self) -> &'static str {
        "scss"
    }

    fn title(&self) -> &'static str {
        "SCSS"
    }

    fn options(&self) -> OptionVisibility {
        OptionVisibility::none()
    }

    fn printer_parser(&self) -> ParserSpec {
        ParserSpec { parser: "scss", plugins: &["postcss"] }
    }

    fn detection_rules(&self) -> &'static [DetectionRule] {
        RULES
    }

    fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode { mode: "scss", extensions: &["scss"] }
    }
}
