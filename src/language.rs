use serde::{Deserialize, Serialize};

/// A locale whose quote and forward headers the parser recognizes.
///
/// Spanish headers are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    German,
    French,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::English, Self::German, Self::French];

    /// Pattern for a quote header line, anchored at the end of the line.
    pub(crate) const fn quote_header(self) -> &'static str {
        match self {
            Self::English => r"On.*wrote:$",
            Self::German => r"Am.*schrieb.*:$",
            // Mails decoded with the wrong charset carry "Ã©" for "é".
            Self::French => r"Le.*(?:é|Ã©)crit\s*:$",
        }
    }

    /// Pattern for a quote header that may be hard-wrapped over several lines.
    pub(crate) const fn multi_line_quote_header(self) -> &'static str {
        match self {
            Self::English => r"(?ms)((?:-+\s*)?On\s.*?wrote:)",
            Self::German => r"(?ms)((?:-+\s*)?Am\s.*?schrieb.*?:)",
            Self::French => r"(?ms)((?:-+\s*)?Le\s.*?(?:é|Ã©)crit\s*:)",
        }
    }

    /// Phrase stems introducing a forwarded message. Already regex syntax.
    pub(crate) const fn forward_phrases(self) -> &'static [&'static str] {
        match self {
            Self::English => &[
                // apple mail
                "Begin forwarded message",
                // gmail, evolution
                "Forwarded [mM]essage",
                // outlook
                "Original [mM]essage",
            ],
            Self::German => &["Weitergeleitete Nachricht", "Ursprüngliche Nachricht"],
            Self::French => &["Message transféré", "Message d'origine"],
        }
    }
}
