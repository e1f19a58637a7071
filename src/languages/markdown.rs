use lazy_static::lazy_static;
use regex::Regex;

use crate::processor::{DetectionRule, LanguageProcessor, OptionVisibility, ParserSpec, SyntaxMode};

lazy_static! {
    static ref MD_LEADING_HEADING: Regex = Regex::new(r"^#{1,6}\s").unwrap();
    static ref MD_LINK_OR_IMAGE: Regex = Regex::new(r"!?\[[^\]]*\]\([^)]*\)").unwrap();
    static ref MD_LEADING_LIST: Regex = Regex::new(r"^[-*]\s").unwrap();
}

fn heading_or_link(text: &str) -> bool {
    MD_LEADING_HEADING.is_match(text) || MD_LINK_OR_IMAGE.is_match(text)
}

fn inline_markup(text: &str) -> bool {
    text.contains('`') || MD_LEADING_LIST.is_match(text)
}

static RULES: &[DetectionRule] = &[
    DetectionRule { priority: 80, matches: heading_or_link },
    DetectionRule { priority: 70, matches: inline_markup },
];

#[derive(Debug, Default, Clone)]
pub struct MarkdownProcessor;

impl LanguageProcessor for MarkdownProcessor {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn title(&self) -> &'static str {
        "Markdown"
    }

    fn options(&self) -> OptionVisibility {
        OptionVisibility::none()
    }

    fn printer_parser(&self) -> ParserSpec {
        ParserSpec { parser: "markdown", plugins: &[] }
    }

    fn detection_rules(&self) -> &'static [DetectionRule] {
        RULES
    }

    fn syntax_mode(&self) -> SyntaxMode {
        SyntaxMode { mode: "markdown", extensions: &["md", "markdown"] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_heading_matches() {
        assert_eq!(MarkdownProcessor.priority("# Title\n\nBody text"), Some(80));
    }

    #[test]
    fn links_and_images_match() {
        let p = MarkdownProcessor;
        assert_eq!(p.priority("see [docs](https://example.com)"), Some(80));
        assert_eq!(p.priority("![alt](image.png)"), Some(80));
    }

    #[test]
    fn inline_code_and_lists_match_at_the_loose_tier() {
        let p = MarkdownProcessor;
        assert_eq!(p.priority("use `cargo build` to compile"), Some(70));
        assert_eq!(p.priority("- first\n- second"), Some(70));
        assert_eq!(p.priority("* bullet"), Some(70));
    }

    #[test]
    fn heading_requires_a_space() {
        // A CSS id selector is not a heading
        assert_eq!(MarkdownProcessor.priority("#header{color:red}"), None);
    }

    #[test]
    fn plain_prose_does_not_match() {
        assert_eq!(MarkdownProcessor.priority("just a sentence."), None);
    }
}
