//!
//! EditSession: the paste-driven re-detection state machine. The editor widget
//! reports each change with its origin; only paste-origin changes trigger
//! language detection, so the selection never thrashes while the user types
//! partial, ambiguous code.

use crate::processor::SyntaxMode;
use crate::registry::{DEFAULT_LANGUAGE, LanguageRegistry, RegistryError};

/// Where an editor change came from, per change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOrigin {
    Typed,
    Paste,
}

/// One editor change: the new full buffer content plus its origin.
#[derive(Debug, Clone, Copy)]
pub struct ChangeEvent<'a> {
    pub text: &'a str,
    pub origin: EditOrigin,
}

/// Reported when a paste re-detection lands on a different language, so the
/// embedding surface can swap options, syntax highlighting, and notify the
/// user in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSwitch {
    pub from: &'static str,
    pub to: &'static str,
    pub to_title: &'static str,
    pub syntax: SyntaxMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeOutcome {
    pub switch: Option<LanguageSwitch>,
    /// Cursor and scroll return to the top of the document after any
    /// paste-triggered re-detection, switch or not.
    pub reset_view: bool,
}

impl ChangeOutcome {
    fn quiet() -> Self {
        ChangeOutcome { switch: None, reset_view: false }
    }
}

/// Tracks the active language across editor changes.
pub struct EditSession<'r> {
    registry: &'r LanguageRegistry,
    active: &'static str,
}

impl<'r> EditSession<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        EditSession { registry, active: DEFAULT_LANGUAGE }
    }

    pub fn active_language(&self) -> &'static str {
        self.active
    }

    /// Manual selection from the language selector. The selector is populated
    /// from the registry, so failure here is a programming error at the call
    /// site, not a user mistake.
    pub fn select(&mut self, id: &str) -> Result<(), RegistryError> {
        self.active = self.registry.resolve(id)?.name();
        Ok(())
    }

    pub fn apply_change(&mut self, event: ChangeEvent<'_>) -> ChangeOutcome {
        match event.origin {
            EditOrigin::Typed => ChangeOutcome::quiet(),
            EditOrigin::Paste => {
                let detected = self.registry.detect_language(event.text);
                let switch = if detected != self.active {
                    match self.registry.resolve(detected) {
                        Ok(processor) => {
                            let switch = LanguageSwitch {
                                from: self.active,
                                to: processor.name(),
                                to_title: processor.title(),
                                syntax: processor.syntax_mode(),
                            };
                            self.active = processor.name();
                            Some(switch)
                        }
                        Err(_) => {
                            // The fallback id can be absent from a custom
                            // registry; keep the current language.
                            log::warn!("detected language '{detected}' is not registered");
                            None
                        }
                    }
                } else {
                    None
                };
                ChangeOutcome { switch, reset_view: true }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_never_re_detects() {
        let registry = LanguageRegistry::with_builtin_languages();
        let mut session = EditSession::new(&registry);

        // Even unambiguous content does not switch while typing
        let outcome = session.apply_change(ChangeEvent {
            text: "<!DOCTYPE html><html></html>",
            origin: EditOrigin::Typed,
        });
        assert_eq!(outcome, ChangeOutcome { switch: None, reset_view: false });
        assert_eq!(session.active_language(), "javascript");
    }

    #[test]
    fn paste_switches_language_and_resets_the_view() {
        let registry = LanguageRegistry::with_builtin_languages();
        let mut session = EditSession::new(&registry);

        let outcome = session.apply_change(ChangeEvent {
            text: "interface Foo { bar: string }",
            origin: EditOrigin::Paste,
        });
        assert!(outcome.reset_view);
        let switch = outcome.switch.expect("paste should switch language");
        assert_eq!(switch.from, "javascript");
        assert_eq!(switch.to, "typescript");
        assert_eq!(switch.syntax.mode, "typescript");
        assert_eq!(session.active_language(), "typescript");
    }

    #[test]
    fn paste_of_the_same_language_resets_the_view_without_a_switch() {
        let registry = LanguageRegistry::with_builtin_languages();
        let mut session = EditSession::new(&registry);

        let outcome = session
            .apply_change(ChangeEvent { text: "const x = 1", origin: EditOrigin::Paste });
        assert!(outcome.reset_view);
        assert!(outcome.switch.is_none());
        assert_eq!(session.active_language(), "javascript");
    }

    #[test]
    fn manual_selection_resolves_through_the_registry() {
        let registry = LanguageRegistry::with_builtin_languages();
        let mut session = EditSession::new(&registry);

        session.select("markdown").unwrap();
        assert_eq!(session.active_language(), "markdown");
        assert!(session.select("cobol").is_err());
        assert_eq!(session.active_language(), "markdown");
    }

    #[test]
    fn ambiguous_paste_falls_back_without_switching() {
        let registry = LanguageRegistry::with_builtin_languages();
        let mut session = EditSession::new(&registry);

        // Nothing matches; detection falls back to javascript, which is
        // already active, so no switch is reported.
        let outcome =
            session.apply_change(ChangeEvent { text: "hello world", origin: EditOrigin::Paste });
        assert!(outcome.switch.is_none());
        assert!(outcome.reset_view);
    }
}
