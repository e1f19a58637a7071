//!
//! This module defines FormatOptions, the UI-owned value object carrying the
//! language id and the seven style settings, plus the closed enums for each
//! setting. Wire names match the option panel's values ("2space", "end-expand",
//! "as-needed", ...).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The external printer requires a finite width, so "no limit" maps to this
/// sentinel instead of an unbounded value.
pub const UNBOUNDED_WIDTH: u32 = 9999;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized value for {option}: {value}")]
pub struct ParseOptionError {
    pub option: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Indent {
    #[serde(rename = "tab")]
    Tab,
    #[default]
    #[serde(rename = "2space")]
    Space2,
    #[serde(rename = "4space")]
    Space4,
}

impl Indent {
    pub fn use_tabs(self) -> bool {
        matches!(self, Indent::Tab)
    }

    pub fn width(self) -> u8 {
        match self {
            Indent::Tab | Indent::Space2 => 2,
            Indent::Space4 => 4,
        }
    }
}

impl std::str::FromStr for Indent {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" => Ok(Indent::Tab),
            "2space" => Ok(Indent::Space2),
            "4space" => Ok(Indent::Space4),
            other => Err(ParseOptionError { option: "indent", value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineWidth {
    #[serde(rename = "no")]
    No,
    #[serde(rename = "80")]
    W80,
    #[default]
    #[serde(rename = "120")]
    W120,
    #[serde(rename = "160")]
    W160,
}

impl LineWidth {
    /// The concrete column count handed to the printer.
    pub fn columns(self) -> u32 {
        match self {
            LineWidth::No => UNBOUNDED_WIDTH,
            LineWidth::W80 => 80,
            LineWidth::W120 => 120,
            LineWidth::W160 => 160,
        }
    }
}

impl std::str::FromStr for LineWidth {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" => Ok(LineWidth::No),
            "80" => Ok(LineWidth::W80),
            "120" => Ok(LineWidth::W120),
            "160" => Ok(LineWidth::W160),
            other => Err(ParseOptionError { option: "max-line-length", value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BraceStyle {
    #[default]
    Collapse,
    Expand,
    EndExpand,
}

impl std::str::FromStr for BraceStyle {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "collapse" => Ok(BraceStyle::Collapse),
            "expand" => Ok(BraceStyle::Expand),
            "end-expand" => Ok(BraceStyle::EndExpand),
            other => Err(ParseOptionError { option: "brace-style", value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    None,
    #[default]
    Es5,
    All,
}

impl TrailingComma {
    pub fn as_str(self) -> &'static str {
        match self {
            TrailingComma::None => "none",
            TrailingComma::Es5 => "es5",
            TrailingComma::All => "all",
        }
    }
}

impl std::str::FromStr for TrailingComma {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TrailingComma::None),
            "es5" => Ok(TrailingComma::Es5),
            "all" => Ok(TrailingComma::All),
            other => Err(ParseOptionError { option: "trailing-comma", value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    Avoid,
    #[default]
    Always,
}

impl ArrowParens {
    pub fn as_str(self) -> &'static str {
        match self {
            ArrowParens::Avoid => "avoid",
            ArrowParens::Always => "always",
        }
    }
}

impl std::str::FromStr for ArrowParens {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "avoid" => Ok(ArrowParens::Avoid),
            "always" => Ok(ArrowParens::Always),
            other => Err(ParseOptionError { option: "arrow-parens", value: other.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuoteProps {
    #[default]
    AsNeeded,
    Consistent,
    Preserve,
}

impl QuoteProps {
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteProps::AsNeeded => "as-needed",
            QuoteProps::Consistent => "consistent",
            QuoteProps::Preserve => "preserve",
        }
    }
}

impl std::str::FromStr for QuoteProps {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "as-needed" => Ok(QuoteProps::AsNeeded),
            "consistent" => Ok(QuoteProps::Consistent),
            "preserve" => Ok(QuoteProps::Preserve),
            other => Err(ParseOptionError { option: "quote-props", value: other.to_string() }),
        }
    }
}

/// The full set of user-facing style settings plus the target language.
/// Short-lived and passed by value into the formatter service; fields that a
/// language does not surface are simply ignored by the printer translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub language: String,
    pub indent: Indent,
    pub max_line_length: LineWidth,
    pub brace_style: BraceStyle,
    pub semi: bool,
    pub single_quote: bool,
    pub trailing_comma: TrailingComma,
    pub arrow_parens: ArrowParens,
    pub jsx_single_quote: bool,
    pub quote_props: QuoteProps,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            language: crate::registry::DEFAULT_LANGUAGE.to_string(),
            indent: Indent::Space2,
            max_line_length: LineWidth::W120,
            brace_style: BraceStyle::Collapse,
            semi: false,
            single_quote: true,
            trailing_comma: TrailingComma::Es5,
            arrow_parens: ArrowParens::Always,
            jsx_single_quote: false,
            quote_props: QuoteProps::AsNeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_translation() {
        assert!(Indent::Tab.use_tabs());
        assert!(!Indent::Space2.use_tabs());
        assert_eq!(Indent::Space2.width(), 2);
        assert_eq!(Indent::Space4.width(), 4);
    }

    #[test]
    fn no_limit_maps_to_a_finite_sentinel() {
        assert_eq!(LineWidth::No.columns(), UNBOUNDED_WIDTH);
        assert_eq!(LineWidth::W80.columns(), 80);
    }

    #[test]
    fn wire_names_round_trip_through_serde() {
        let options = FormatOptions {
            indent: Indent::Space4,
            max_line_length: LineWidth::No,
            brace_style: BraceStyle::EndExpand,
            quote_props: QuoteProps::AsNeeded,
            ..FormatOptions::default()
        };
        let toml = toml::to_string(&options).unwrap();
        assert!(toml.contains("indent = \"4space\""));
        assert!(toml.contains("max_line_length = \"no\""));
        assert!(toml.contains("brace_style = \"end-expand\""));
        assert!(toml.contains("quote_props = \"as-needed\""));
        let parsed: FormatOptions = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn from_str_rejects_unknown_values() {
        let err = "3space".parse::<Indent>().unwrap_err();
        assert_eq!(err.option, "indent");
        assert!("no".parse::<LineWidth>().is_ok());
        assert!("999".parse::<LineWidth>().is_err());
    }

    #[test]
    fn defaults_match_the_options_panel() {
        let options = FormatOptions::default();
        assert_eq!(options.language, "javascript");
        assert_eq!(options.indent, Indent::Space2);
        assert_eq!(options.max_line_length, LineWidth::W120);
        assert!(!options.semi);
        assert!(options.single_quote);
    }
}
