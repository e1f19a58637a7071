//!
//! One module per supported language. Each holds a stateless processor whose
//! detection rule table layers fingerprints from most to least specific;
//! cross-language precedence is decided by the registry, not here.

pub mod css;
pub mod html;
pub mod javascript;
pub mod json;
pub mod markdown;
pub mod scss;
pub mod typescript;
pub mod yaml;

pub use css::CssProcessor;
pub use html::HtmlProcessor;
pub use javascript::JavaScriptProcessor;
pub use json::JsonProcessor;
pub use markdown::MarkdownProcessor;
pub use scss::ScssProcessor;
pub use typescript::TypeScriptProcessor;
pub use yaml::YamlProcessor;
