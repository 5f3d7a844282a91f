//! Email Reply Parser
//!
//! Splits a plain-text email body into fragments (quoted history, forwarded
//! messages, signatures) and recovers the reply a human actually wrote.
//!
//! # Example
//!
//! ```rust
//! use email_reply_parser::EmailReplyParser;
//!
//! let body = "Sounds good!\n\nOn Mon, Jan 1, 2018, Bob wrote:\n> Lunch tomorrow?";
//! assert_eq!(EmailReplyParser::parse_reply(body), "Sounds good!");
//!
//! let message = EmailReplyParser::read(body);
//! assert!(message.fragments()[1].is_quoted());
//! ```

mod config;
mod email_parser;
mod error;
mod fragment;
mod language;
mod patterns;

use std::sync::LazyLock;

use tracing::debug;

pub use config::{LineEndings, ParserConfig};
pub use email_parser::EmailMessage;
pub use error::{ParseError, Result};
pub use fragment::Fragment;
pub use language::Language;
pub use patterns::Patterns;

/// Entry points using the built-in patterns for every supported language.
pub struct EmailReplyParser;

impl EmailReplyParser {
    pub fn read(text: &str) -> EmailMessage {
        EmailMessage::new(text).read()
    }

    pub fn parse_reply(text: &str) -> String {
        Self::read(text).reply()
    }

    /// Like [`read`](Self::read), but for raw bytes that must be UTF-8.
    pub fn read_bytes(raw: &[u8]) -> Result<EmailMessage> {
        Ok(Self::read(std::str::from_utf8(raw)?))
    }
}

static DEFAULT_PARSER: LazyLock<ReplyParser> = LazyLock::new(ReplyParser::default);

/// A parser built from a [`ParserConfig`].
///
/// Compiles its patterns once; it is `Send + Sync` and can be shared
/// between threads.
#[derive(Debug, Clone)]
pub struct ReplyParser {
    patterns: Patterns,
    line_endings: LineEndings,
}

impl ReplyParser {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        debug!(
            languages = ?config.languages,
            forward_phrases = config.forward_phrases.len(),
            line_endings = ?config.line_endings,
            "Building reply parser"
        );
        Ok(Self {
            patterns: Patterns::new(config)?,
            line_endings: config.line_endings,
        })
    }

    /// The parser with the default configuration.
    pub fn shared() -> &'static Self {
        &DEFAULT_PARSER
    }

    pub fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    pub fn read(&self, text: &str) -> EmailMessage {
        EmailMessage::normalized(self.line_endings.normalize(text)).read_with(&self.patterns)
    }

    pub fn parse_reply(&self, text: &str) -> String {
        self.read(text).reply()
    }

    pub fn read_bytes(&self, raw: &[u8]) -> Result<EmailMessage> {
        Ok(self.read(std::str::from_utf8(raw)?))
    }
}

impl Default for ReplyParser {
    fn default() -> Self {
        Self {
            patterns: Patterns::default_set().clone(),
            line_endings: LineEndings::default(),
        }
    }
}
