use serde::Serialize;
use tracing::{debug, trace};

use crate::config::LineEndings;
use crate::fragment::{Fragment, PendingFragment};
use crate::patterns::Patterns;

/// A parsed email body: its normalized text and the fragments it splits into.
#[derive(Debug, Clone, Serialize)]
pub struct EmailMessage {
    text: String,
    fragments: Vec<Fragment>,
}

impl EmailMessage {
    /// Wraps `text` with `\r\n` folded into `\n`. Call [`read`](Self::read)
    /// to split it into fragments.
    pub fn new(text: &str) -> Self {
        Self::normalized(LineEndings::CrLf.normalize(text))
    }

    pub(crate) const fn normalized(text: String) -> Self {
        Self {
            text,
            fragments: Vec::new(),
        }
    }

    /// Splits the message using the built-in patterns for every language.
    pub fn read(self) -> Self {
        self.read_with(Patterns::default_set())
    }

    /// Splits the message into fragments, labelling each as quoted,
    /// forwarded, signature or hidden.
    pub fn read_with(mut self, patterns: &Patterns) -> Self {
        let collapsed = if let Some(range) = patterns.find_quote_header(&self.text) {
            let header = self.text[range.clone()].replace('\n', "");
            self.text.replace_range(range, &header);
            true
        } else {
            false
        };

        let mut scanner = Scanner::new(patterns);
        for line in self.text.split('\n').rev() {
            scanner.scan_line(line);
        }
        let forwarded = scanner.forward_boundary.is_some();
        self.fragments = scanner.finish();

        debug!(
            fragments = self.fragments.len(),
            collapsed_quote_header = collapsed,
            forwarded,
            "Read email message"
        );

        self
    }

    /// Fragments in document order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The text the fragments were cut from, after line ending
    /// normalization and quote header collapsing.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The part a human wrote: every fragment that is neither hidden,
    /// quoted nor forwarded, joined by newlines.
    pub fn reply(&self) -> String {
        self.fragments
            .iter()
            .filter(|f| f.is_reply())
            .map(Fragment::content)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether a forward header was found.
    pub fn is_forwarded(&self) -> bool {
        self.fragments.iter().any(Fragment::is_forwarded)
    }
}

/// State of one bottom-up pass over the lines of a message.
struct Scanner<'p> {
    patterns: &'p Patterns,
    fragment: Option<PendingFragment>,
    fragments: Vec<Fragment>,
    found_visible: bool,
    /// Number of finished fragments when the topmost forward header was seen.
    forward_boundary: Option<usize>,
}

impl<'p> Scanner<'p> {
    const fn new(patterns: &'p Patterns) -> Self {
        Self {
            patterns,
            fragment: None,
            fragments: Vec::new(),
            found_visible: false,
            forward_boundary: None,
        }
    }

    fn scan_line(&mut self, line: &str) {
        let line = line.trim();

        // The header line itself is dropped.
        if self.patterns.is_forward_header(line) {
            self.finish_fragment();
            self.forward_boundary = Some(self.fragments.len());
            return;
        }

        let is_quoted = self.patterns.is_quoted(line);

        let closes_signature = self
            .fragment
            .as_ref()
            .and_then(PendingFragment::first_line)
            .is_some_and(|first| {
                (line.is_empty() && self.patterns.is_signature(first))
                    || self.patterns.is_signature_delimiter(first)
            });
        if closes_signature {
            if let Some(fragment) = self.fragment.as_mut() {
                fragment.mark_signature();
            }
            self.finish_fragment();
        }

        let continues = self.fragment.as_ref().is_some_and(|fragment| {
            fragment.quoted() == is_quoted
                || (fragment.quoted()
                    && (line.is_empty() || self.patterns.is_quote_header(line)))
        });

        if continues {
            if let Some(fragment) = self.fragment.as_mut() {
                fragment.push(line);
            }
        } else {
            self.finish_fragment();
            self.fragment = Some(PendingFragment::new(is_quoted, line));
        }
    }

    fn finish_fragment(&mut self) {
        let Some(pending) = self.fragment.take() else {
            return;
        };
        let mut fragment = pending.finish();

        if !self.found_visible {
            if fragment.quoted || fragment.signature || fragment.is_blank() {
                fragment.hidden = true;
            } else {
                self.found_visible = true;
            }
        }

        trace!(
            quoted = fragment.quoted,
            signature = fragment.signature,
            hidden = fragment.hidden,
            len = fragment.content.len(),
            "Finished fragment"
        );
        self.fragments.push(fragment);
    }

    /// Closes the open fragment and returns all fragments in document order.
    fn finish(mut self) -> Vec<Fragment> {
        self.finish_fragment();

        if let Some(boundary) = self.forward_boundary {
            for fragment in &mut self.fragments[..boundary] {
                fragment.forwarded = true;
            }
        }

        self.fragments.reverse();
        self.fragments
    }
}
