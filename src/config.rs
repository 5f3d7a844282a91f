//! Parser configuration

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// How line endings are unified before scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndings {
    /// Fold `\r\n` into `\n`. A lone `\r` is kept as an ordinary character.
    #[default]
    CrLf,
    /// Fold `\r\n` and then every remaining lone `\r` into `\n`.
    Any,
}

impl LineEndings {
    pub(crate) fn normalize(self, text: &str) -> String {
        let text = text.replace("\r\n", "\n");
        match self {
            Self::CrLf => text,
            Self::Any => text.replace('\r', "\n"),
        }
    }
}

/// Settings for a [`ReplyParser`](crate::ReplyParser).
///
/// Every field has a default, so a partial document deserializes:
///
/// ```rust
/// use email_reply_parser::{Language, ParserConfig};
///
/// let config = ParserConfig {
///     languages: vec![Language::English],
///     ..ParserConfig::default()
/// };
/// assert!(config.forward_phrases.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Locales whose quote and forward headers are recognized, tried in order
    pub languages: Vec<Language>,

    /// Extra literal phrases that introduce a forwarded message
    pub forward_phrases: Vec<String>,

    /// Line ending policy
    pub line_endings: LineEndings,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            languages: Language::ALL.to_vec(),
            forward_phrases: Vec::new(),
            line_endings: LineEndings::default(),
        }
    }
}
