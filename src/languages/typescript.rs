use lazy_static::lazy_static;
use regex::Regex;

use crate::processor::{DetectionRule, LanguageProcessor, OptionVisibility, ParserSpec, SyntaxMode};

lazy_static! {
    static ref TS_FILE_SUFFIX: Regex = Regex::new(r"\.(tsx?)$").unwrap();
    static ref TS_LEADING_DECLARATION: Regex = Regex::new(r"^(interface|type|enum)\s+\w+").unwrap();
    static ref TS_TYPE_ANNOTATION: Regex =
        Regex::new(r":\s*(string|number|boolean|any|unknown|void|never)\b").unwrap();
    static ref TS_TYPES_IMPORT: Regex =
        Regex::new(r#"import\s+\{\s*[^}]+\s*\}\s+from\s+['"]@types/"#).unwrap();
}

fn file_suffix(text: &str) -> bool {
    TS_FILE_SUFFIX.is_match(text)
}

fn leading_declaration(text: &str) -> bool {
    TS_LEADING_DECLARATION.is_match(text)
}

fn type_syntax(text: &str) -> bool {
    text.contains("interface ")
        || text.contains("type ")
        || TS_TYPE_ANNOTATION.is_match(text)
        || TS_TYPES_IMPORT.is_match(text)
}

static RULES: &[DetectionRule] = &[
    DetectionRule { priority: 100, matches: file_suffix },
    DetectionRule { priority: 90, matches: leading_declaration },
    DetectionRule { priority: 80, matches: type_syntax },
];

#[derive(Debug, Default, Clone)]
pub struct TypeScriptProcessor;

impl LanguageProcessor for TypeScriptProcessor {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn title(&self) -> &'static str {
        "TypeScript"
    }

    fn options(&self) -> OptionVisibility {
        OptionVisibility::script()
    }

    fn printer_parser(&self) -> ParserSpec {
        ParserSpec { parser: "babel-ts", plugins: &["babel", "estree"] }
    }

    fn detection_rules(&self) -> &'static [DetectionRule] {
        RULES
    }

    fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode { mode: "typescript", extensions: &["ts", "tsx"] }
    }
}
