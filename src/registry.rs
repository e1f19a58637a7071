//!
//! This module defines the LanguageRegistry: the process-wide table of language
//! processors, populated once at startup and read-only afterward. It owns
//! cross-processor language detection, including the tie-break and fallback
//! policies.

use indexmap::IndexMap;
use thiserror::Error;

use crate::languages::{
    CssProcessor, HtmlProcessor, JavaScriptProcessor, JsonProcessor, MarkdownProcessor,
    ScssProcessor, TypeScriptProcessor, YamlProcessor,
};
use crate::processor::LanguageProcessor;

/// The fallback when no detection rule in any processor matches.
pub const DEFAULT_LANGUAGE: &str = "javascript";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no processor registered for language: {0}")]
    UnregisteredLanguage(String),
}

/// An `{id, title}` pair for the language selector, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub id: &'static str,
    pub title: &'static str,
}

/// Registry of language processors. Construct explicitly and pass by
/// reference; there is no ambient global instance.
#[derive(Default, Clone)]
pub struct LanguageRegistry {
    table: IndexMap<&'static str, Box<dyn LanguageProcessor>>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        LanguageRegistry { table: IndexMap::new() }
    }

    /// A registry with every built-in processor, in the registration order
    /// that fixes cross-language tie-breaks.
    pub fn with_builtin_languages() -> Self {
        let mut registry = LanguageRegistry::new();
        registry.register(Box::new(TypeScriptProcessor));
        registry.register(Box::new(JavaScriptProcessor));
        registry.register(Box::new(CssProcessor));
        registry.register(Box::new(ScssProcessor));
        registry.register(Box::new(JsonProcessor));
        registry.register(Box::new(HtmlProcessor));
        registry.register(Box::new(YamlProcessor));
        registry.register(Box::new(MarkdownProcessor));
        registry
    }

    /// Idempotent insert: the first registration of an id wins and later ones
    /// are silently ignored, so double-initialization cannot rebind a language.
    pub fn register(&mut self, processor: Box<dyn LanguageProcessor>) {
        let id = processor.name();
        if self.table.contains_key(id) {
            log::debug!("ignoring duplicate registration for language '{id}'");
            return;
        }
        self.table.insert(id, processor);
    }

    pub fn resolve(&self, id: &str) -> Result<&dyn LanguageProcessor, RegistryError> {
        self.table
            .get(id)
            .map(|processor| processor.as_ref())
            .ok_or_else(|| RegistryError::UnregisteredLanguage(id.to_string()))
    }

    /// Classify a text sample. Every processor scores the trimmed sample; the
    /// strictly highest priority wins, ties go to the earlier registrant, and
    /// when nothing matches the default language is returned.
    pub fn detect_language(&self, text: &str) -> &'static str {
        let sample = text.trim();
        let mut best: Option<(&'static str, u8)> = None;
        for (id, processor) in &self.table {
            if let Some(priority) = processor.priority(sample) {
                log::debug!("language '{id}' matched at priority {priority}");
                match best {
                    Some((_, current)) if priority <= current => {}
                    _ => best = Some((*id, priority)),
                }
            }
        }
        match best {
            Some((id, _)) => id,
            None => {
                log::debug!("no detection rule matched; falling back to {DEFAULT_LANGUAGE}");
                DEFAULT_LANGUAGE
            }
        }
    }

    pub fn languages(&self) -> Vec<LanguageEntry> {
        self.table
            .values()
            .map(|processor| LanguageEntry { id: processor.name(), title: processor.title() })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::{DetectionRule, OptionVisibility, ParserSpec, SyntaxMode};

    fn always(_: &str) -> bool {
        true
    }

    #[derive(Debug, Clone)]
    struct FixedProcessor {
        id: &'static str,
        title: &'static str,
        rules: &'static [DetectionRule],
    }

    impl LanguageProcessor for FixedProcessor {
        fn name(&self) -> &'static str {
            self.id
        }

        fn title(&self) -> &'static str {
            self.title
        }

        fn options(&self) -> OptionVisibility {
            OptionVisibility::none()
        }

        fn printer_parser(&self) -> ParserSpec {
            ParserSpec { parser: self.id, plugins: &[] }
        }

        fn detection_rules(&self) -> &'static [DetectionRule] {
            self.rules
        }

        fn syntax_mode(&self) -> SyntaxMode {
            SyntaxMode { mode: self.id, extensions: &[] }
        }
    }

    static AT_80: &[DetectionRule] = &[DetectionRule { priority: 80, matches: always }];

    #[test]
    fn registration_is_idempotent() {
        let mut registry = LanguageRegistry::new();
        registry.register(Box::new(FixedProcessor { id: "x", title: "First", rules: AT_80 }));
        registry.register(Box::new(FixedProcessor { id: "x", title: "Second", rules: AT_80 }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("x").unwrap().title(), "First");
    }

    #[test]
    fn resolve_unknown_id_fails() {
        let registry = LanguageRegistry::with_builtin_languages();
        assert_eq!(
            registry.resolve("cobol").unwrap_err(),
            RegistryError::UnregisteredLanguage("cobol".to_string())
        );
    }

    #[test]
    fn equal_priorities_resolve_to_the_first_registrant() {
        let mut registry = LanguageRegistry::new();
        registry.register(Box::new(FixedProcessor { id: "a", title: "A", rules: AT_80 }));
        registry.register(Box::new(FixedProcessor { id: "b", title: "B", rules: AT_80 }));
        assert_eq!(registry.detect_language("anything"), "a");

        let mut reversed = LanguageRegistry::new();
        reversed.register(Box::new(FixedProcessor { id: "b", title: "B", rules: AT_80 }));
        reversed.register(Box::new(FixedProcessor { id: "a", title: "A", rules: AT_80 }));
        assert_eq!(reversed.detect_language("anything"), "b");
    }

    #[test]
    fn empty_text_falls_back_to_javascript() {
        let registry = LanguageRegistry::with_builtin_languages();
        assert_eq!(registry.detect_language(""), DEFAULT_LANGUAGE);
    }

    #[test]
    fn detection_is_deterministic() {
        let registry = LanguageRegistry::with_builtin_languages();
        let sample = "const x = 1";
        let first = registry.detect_language(sample);
        for _ in 0..10 {
            assert_eq!(registry.detect_language(sample), first);
        }
    }

    #[test]
    fn listing_preserves_registration_order() {
        let registry = LanguageRegistry::with_builtin_languages();
        let ids: Vec<&str> = registry.languages().iter().map(|entry| entry.id).collect();
        assert_eq!(
            ids,
            vec!["typescript", "javascript", "css", "scss", "json", "html", "yaml", "markdown"]
        );
    }
}
