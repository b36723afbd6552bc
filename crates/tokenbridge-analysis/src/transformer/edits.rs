//! Non-overlapping text edits applied in a single pass.

use std::ops::Range;

/// Replace `span` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Range<usize>,
    pub replacement: String,
}

impl Edit {
    pub fn new(span: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(at..at, text)
    }

    fn overlaps(&self, other: &Edit) -> bool {
        if self.span.is_empty() || other.span.is_empty() {
            // Insertions conflict only with edits that strictly contain them.
            let (point, range) = if self.span.is_empty() {
                (self.span.start, &other.span)
            } else {
                (other.span.start, &self.span)
            };
            return range.start < point && point < range.end;
        }
        self.span.start < other.span.end && other.span.start < self.span.end
    }
}

/// Result of offering a group of edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// At least one edit changes the text.
    Applied,
    /// Every edit reproduces the original text.
    NoOp,
    /// Some edit overlaps an accepted one; nothing was taken.
    Rejected,
}

/// Accepted edits for one file.
#[derive(Debug, Default)]
pub struct EditSet {
    accepted: Vec<Edit>,
}

impl EditSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a group of edits that must apply together. A no-op group still
    /// claims its spans so later edits cannot split it.
    pub fn offer(&mut self, content: &str, group: Vec<Edit>) -> Offer {
        if group.is_empty() {
            return Offer::NoOp;
        }
        let conflicts = group.iter().enumerate().any(|(i, edit)| {
            self.accepted.iter().any(|a| a.overlaps(edit))
                || group[..i].iter().any(|g| g.overlaps(edit))
        });
        if conflicts {
            return Offer::Rejected;
        }
        let changes = group
            .iter()
            .any(|e| content.get(e.span.clone()) != Some(e.replacement.as_str()));
        self.accepted.extend(group);
        if changes {
            Offer::Applied
        } else {
            Offer::NoOp
        }
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Apply all accepted edits to `content`.
    pub fn apply(mut self, content: &str) -> String {
        self.accepted
            .sort_by_key(|e| (e.span.start, e.span.end));
        let mut out = String::with_capacity(content.len());
        let mut cursor = 0;
        for edit in &self.accepted {
            out.push_str(&content[cursor..edit.span.start]);
            out.push_str(&edit.replacement);
            cursor = edit.span.end;
        }
        out.push_str(&content[cursor..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_rejected() {
        let src = "abcdef";
        let mut set = EditSet::new();
        assert_eq!(set.offer(src, vec![Edit::new(1..4, "X")]), Offer::Applied);
        assert_eq!(set.offer(src, vec![Edit::new(3..5, "Y")]), Offer::Rejected);
        assert_eq!(set.offer(src, vec![Edit::new(4..5, "e")]), Offer::NoOp);
        assert_eq!(set.apply(src), "aXef");
    }

    #[test]
    fn test_group_is_atomic() {
        let src = "0123456789";
        let mut set = EditSet::new();
        set.offer(src, vec![Edit::new(5..6, "_")]);
        let offer = set.offer(src, vec![Edit::new(0..1, "a"), Edit::new(5..7, "b")]);
        assert_eq!(offer, Offer::Rejected);
        assert_eq!(set.apply(src), "01234_6789");
    }

    #[test]
    fn test_insertions() {
        let src = "ab";
        let mut set = EditSet::new();
        set.offer(src, vec![Edit::new(0..1, "A")]);
        assert_eq!(set.offer(src, vec![Edit::insert(1, "-")]), Offer::Applied);
        assert_eq!(set.apply(src), "A-b");
    }
}
