use lazy_static::lazy_static;
use regex::Regex;

use crate::processor::{DetectionRule, LanguageProcessor, OptionVisibility, ParserSpec, SyntaxMode};

lazy_static! {
    static ref JS_FILE_SUFFIX: Regex = Regex::new(r"\.(jsx?)$").unwrap();
    static ref JS_LEADING_KEYWORD: Regex = Regex::new(r"^(class|async|await)").unwrap();
}

fn file_suffix(text: &str) -> bool {
    JS_FILE_SUFFIX.is_match(text)
}

fn script_tokens(text: &str) -> bool {
    text.contains("import ")
        || text.contains("export ")
        || text.contains("function ")
        || text.contains("const ")
        || text.contains("let ")
        || JS_LEADING_KEYWORD.is_match(text)
}

static RULES: &[DetectionRule] = &[
    DetectionRule { priority: 90, matches: file_suffix },
    DetectionRule { priority: 80, matches: script_tokens },
];

/// JavaScript: the default language and the detection fallback.
#[derive(Debug, Default, Clone)]
pub struct JavaScriptProcessor;

impl LanguageProcessor for JavaScriptProcessor {
    fn name(&self) -> &'static str {
        "javascript"
    }

    fn title(&self) -> &'static str {
        "JavaScript"
    }

    fn options(&self) -> OptionVisibility {
        OptionVisibility::script()
    }

    fn printer_parser(&self) -> ParserSpec {
        ParserSpec { parser: "babel", plugins: &["babel", "estree"] }
    }

    fn detection_rules(&self) -> &'static [DetectionRule] {
        RULES
    }

    fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode { mode: "javascript", extensions: &["js", "jsx"] }
    }
}
