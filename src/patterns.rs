//! Pattern tables used to classify lines

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::language::Language;

const SIGNATURE: &str = r"^(?:--|__|-\w|Sent from my (?:\w+\s*){1,3})";
const QUOTED: &str = r"^>+";

static DEFAULT_PATTERNS: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(&ParserConfig::default()).expect("built-in patterns compile")
});

/// Compiled, read-only pattern tables.
///
/// Every table is tried in order and the first match wins. All matching is
/// done by the `regex` crate, so a search runs in time linear in the input.
#[derive(Debug, Clone)]
pub struct Patterns {
    signature: Regex,
    quoted: Regex,
    quote_headers: Vec<Regex>,
    multi_line_quote_headers: Vec<Regex>,
    forward_headers: Vec<Regex>,
}

impl Patterns {
    pub fn new(config: &ParserConfig) -> Result<Self> {
        let quote_headers = config
            .languages
            .iter()
            .map(|lang| Regex::new(lang.quote_header()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let multi_line_quote_headers = config
            .languages
            .iter()
            .map(|lang| Regex::new(lang.multi_line_quote_header()))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let phrases: Vec<String> = config
            .languages
            .iter()
            .flat_map(|lang| lang.forward_phrases().iter().map(|p| (*p).to_string()))
            .chain(config.forward_phrases.iter().map(|p| regex::escape(p)))
            .collect();

        // Dashed form first, then the bare "<phrase>:" form.
        let forward_headers = phrases
            .iter()
            .map(|p| format!(r"^---+ ?{p}.* ?---+$"))
            .chain(phrases.iter().map(|p| format!(r"^{p}:$")))
            .map(|pattern| Regex::new(&pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            signature: Regex::new(SIGNATURE)?,
            quoted: Regex::new(QUOTED)?,
            quote_headers,
            multi_line_quote_headers,
            forward_headers,
        })
    }

    /// The tables for every supported language, compiled on first use.
    pub fn default_set() -> &'static Self {
        &DEFAULT_PATTERNS
    }

    /// A line opening a signature block: `--`, `__`, `-Name`, or
    /// "Sent from my Device".
    pub fn is_signature(&self, line: &str) -> bool {
        self.signature.is_match(line)
    }

    /// The `-- ` footer mark, once trimmed.
    pub fn is_signature_delimiter(&self, line: &str) -> bool {
        line == "--"
    }

    pub fn is_quoted(&self, line: &str) -> bool {
        self.quoted.is_match(line)
    }

    /// Whether the line ends with a quote header such as "On ... wrote:".
    pub fn is_quote_header(&self, line: &str) -> bool {
        self.quote_headers.iter().any(|re| re.is_match(line))
    }

    /// Byte range of the first quote header found anywhere in `text`,
    /// possibly spanning several lines.
    pub fn find_quote_header(&self, text: &str) -> Option<Range<usize>> {
        self.multi_line_quote_headers
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.range())
    }

    pub fn is_forward_header(&self, line: &str) -> bool {
        self.forward_headers.iter().any(|re| re.is_match(line))
    }
}
