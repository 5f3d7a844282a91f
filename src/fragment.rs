use serde::Serialize;

/// A run of contiguous lines sharing the same classification.
///
/// Fragments are only handed out finished: the content is joined once and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub(crate) content: String,
    pub(crate) quoted: bool,
    pub(crate) forwarded: bool,
    pub(crate) signature: bool,
    pub(crate) hidden: bool,
}

impl Fragment {
    /// The fragment's lines, trimmed, in document order and joined by `\n`.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub const fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Part of a message below a forward header.
    pub const fn is_forwarded(&self) -> bool {
        self.forwarded
    }

    pub const fn is_signature(&self) -> bool {
        self.signature
    }

    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Whether this fragment belongs in the extracted reply.
    pub const fn is_reply(&self) -> bool {
        !(self.hidden || self.quoted || self.forwarded)
    }
}

/// A fragment still being scanned. Lines arrive bottom-up.
#[derive(Debug)]
pub(crate) struct PendingFragment {
    quoted: bool,
    signature: bool,
    lines: Vec<String>,
}

impl PendingFragment {
    pub(crate) fn new(quoted: bool, first_line: &str) -> Self {
        Self {
            quoted,
            signature: false,
            lines: vec![first_line.to_string()],
        }
    }

    pub(crate) const fn quoted(&self) -> bool {
        self.quoted
    }

    /// The topmost line scanned so far.
    pub(crate) fn first_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub(crate) fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    pub(crate) fn mark_signature(&mut self) {
        self.signature = true;
    }

    pub(crate) fn finish(mut self) -> Fragment {
        self.lines.reverse();
        Fragment {
            content: self.lines.join("\n"),
            quoted: self.quoted,
            forwarded: false,
            signature: self.signature,
            hidden: false,
        }
    }
}
