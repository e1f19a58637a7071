use crate::processor::{DetectionRule, LanguageProcessor, OptionVisibility, ParserSpec, SyntaxMode};

fn file_suffix(text: &str) -> bool {
    text.contains(".json")
}

/// Wrapped in `{}`/`[]` and parses as JSON. A parse failure demotes the text
/// out of this rule so later rules (other languages) can claim it.
fn valid_json_document(text: &str) -> bool {
    let trimmed = text.trim();
    let wrapped = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    wrapped && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
}

static RULES: &[DetectionRule] = &[
    DetectionRule { priority: 90, matches: file_suffix },
    DetectionRule { priority: 80, matches: valid_json_document },
];

#[derive(Debug, Default, Clone)]
pub struct JsonProcessor;

impl LanguageProcessor for JsonProcessor {
    fn name(&self) -> &'static str {
        "json"
    }

    fn title(&self) -> &'static str {
        "JSON"
    }

    fn options(&self) -> OptionVisibility {
        OptionVisibility::none()
    }

    fn printer_parser(&self) -> ParserSpec {
        ParserSpec { parser: "json", plugins: &["babel", "estree"] }
    }

    fn detection_rules(&self) -> &'static [DetectionRule] {
        RULES
    }

    fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode { mode: "json", extensions: &["json"] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_objects_and_arrays_match() {
        let p = JsonProcessor;
        assert_eq!(p.priority(r#"{"a":1}"#), Some(80));
        assert_eq!(p.priority(r#"[1, 2, 3]"#), Some(80));
        assert_eq!(p.priority("{\n  \"key\": \"value\"\n}"), Some(80));
    }

    #[test]
    fn parse_failure_demotes_out_of_the_rule() {
        let p = JsonProcessor;
        // Braced but not valid JSON: single quotes, trailing comma
        assert_eq!(p.priority("{'a': 1}"), None);
        assert_eq!(p.priority(r#"{"a": 1,}"#), None);
    }

    #[test]
    fn unwrapped_scalars_do_not_match() {
        // "42" is valid JSON but is not wrapped in braces or brackets
        assert_eq!(JsonProcessor.priority("42"), None);
    }

    #[test]
    fn file_mention_outranks_parse() {
        assert_eq!(JsonProcessor.priority("package.json"), Some(90));
    }
}
