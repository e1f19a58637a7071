//!
//! This module defines the LanguageProcessor trait and the small value types it
//! bundles: option visibility flags, the external printer's parser spec, the
//! detection rule table, and the editor syntax-mode descriptor.

use dyn_clone::DynClone;
use serde::Serialize;

/// A single detection heuristic: a pure predicate over the pasted text plus the
/// priority it contributes when it matches.
#[derive(Clone, Copy)]
pub struct DetectionRule {
    pub priority: u8,
    pub matches: fn(&str) -> bool,
}

impl std::fmt::Debug for DetectionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectionRule").field("priority", &self.priority).finish()
    }
}

/// Which style options are meaningful for a language. The options panel reads
/// these to decide which controls to render; unused options are simply ignored
/// by the printer-config translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionVisibility {
    pub brace_style: bool,
    pub semi: bool,
    pub quote_style: bool,
    pub trailing_comma: bool,
    pub arrow_parens: bool,
    pub jsx_quote: bool,
    pub quote_props: bool,
}

impl OptionVisibility {
    /// Every option is meaningful (the JS/TS family).
    pub const fn script() -> Self {
        OptionVisibility {
            brace_style: true,
            semi: true,
            quote_style: true,
            trailing_comma: true,
            arrow_parens: true,
            jsx_quote: true,
            quote_props: true,
        }
    }

    /// No style option applies beyond indent and line width.
    pub const fn none() -> Self {
        OptionVisibility {
            brace_style: false,
            semi: false,
            quote_style: false,
            trailing_comma: false,
            arrow_parens: false,
            jsx_quote: false,
            quote_props: false,
        }
    }
}

/// The external pretty-printer's invocation parameters for one language,
/// passed verbatim into the printer config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParserSpec {
    pub parser: &'static str,
    /// Opaque plugin handles, in load order.
    pub plugins: &'static [&'static str],
}

/// Descriptor for the external editor widget's syntax-highlighting extension.
/// The embedding surface resolves this to an actual editor mode; the core only
/// names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyntaxMode {
    pub mode: &'static str,
    pub extensions: &'static [&'static str],
}

/// One implementation per supported source language: a stateless descriptor
/// bundling display metadata, detection rules, printer parameters, and the
/// editor syntax mode. Constructed once at startup and never mutated.
pub trait LanguageProcessor: DynClone + Send + Sync + std::fmt::Debug {
    /// Stable language id, used as the registry key and the value of the
    /// `language` style option.
    fn name(&self) -> &'static str;

    /// Human-readable label for the language selector.
    fn title(&self) -> &'static str;

    fn options(&self) -> OptionVisibility;

    fn printer_parser(&self) -> ParserSpec;

    /// Rules in declared order, most specific first. Only the first matching
    /// rule's priority counts for this processor.
    fn detection_rules(&self) -> &'static [DetectionRule];

    fn syntax_mode(&self) -> SyntaxMode;

    /// True iff any detection rule matches.
    fn detect(&self, text: &str) -> bool {
        self.detection_rules().iter().any(|rule| (rule.matches)(text))
    }

    /// Priority of the first rule (in declared order) that matches, or `None`
    /// when no rule matches.
    fn priority(&self, text: &str) -> Option<u8> {
        self.detection_rules()
            .iter()
            .find(|rule| (rule.matches)(text))
            .map(|rule| rule.priority)
    }
}

dyn_clone::clone_trait_object!(LanguageProcessor);

#[cfg(test)]
mod tests {
    use super::*;

    fn always(_: &str) -> bool {
        true
    }

    fn never(_: &str) -> bool {
        false
    }

    #[derive(Debug, Clone)]
    struct FakeProcessor;

    static FAKE_RULES: &[DetectionRule] = &[
        DetectionRule { priority: 50, matches: never },
        DetectionRule { priority: 40, matches: always },
        DetectionRule { priority: 90, matches: always },
    ];

    impl LanguageProcessor for FakeProcessor {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn title(&self) -> &'static str {
            "Fake"
        }

        fn options(&self) -> OptionVisibility {
            OptionVisibility::none()
        }

        fn printer_parser(&self) -> ParserSpec {
            ParserSpec { parser: "fake", plugins: &[] }
        }

        fn detection_rules(&self) -> &'static [DetectionRule] {
            FAKE_RULES
        }

        fn syntax_mode(&self) -> SyntaxMode {
            SyntaxMode { mode: "fake", extensions: &[] }
        }
    }

    #[test]
    fn priority_uses_first_matching_rule_in_declared_order() {
        // The priority-90 rule also matches, but the priority-40 rule comes
        // first in declared order.
        assert_eq!(FakeProcessor.priority("anything"), Some(40));
        assert!(FakeProcessor.detect("anything"));
    }

    #[derive(Debug, Clone)]
    struct NoMatchProcessor;

    static NO_MATCH_RULES: &[DetectionRule] = &[DetectionRule { priority: 80, matches: never }];

    impl LanguageProcessor for NoMatchProcessor {
        fn name(&self) -> &'static str {
            "nomatch"
        }

        fn title(&self) -> &'static str {
            "No Match"
        }

        fn options(&self) -> OptionVisibility {
            OptionVisibility::none()
        }

        fn printer_parser(&self) -> ParserSpec {
            ParserSpec { parser: "none", plugins: &[] }
        }

        fn detection_rules(&self) -> &'static [DetectionRule] {
            NO_MATCH_RULES
        }

        fn syntax_mode(&self) -> SyntaxMode {
            SyntaxMode { mode: "none", extensions: &[] }
        }
    }

    #[test]
    fn no_matching_rule_returns_none() {
        assert_eq!(NoMatchProcessor.priority("anything"), None);
        assert!(!NoMatchProcessor.detect("anything"));
    }
}
