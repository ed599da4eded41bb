//! FAQ accordion: at most one answer is expanded at a time.

use crate::models::shop::{default_faqs, FaqEntry};

#[derive(Debug, Clone)]
pub struct FaqAccordion {
    entries: Vec<FaqEntry>,
    expanded: Option<usize>,
}

impl Default for FaqAccordion {
    fn default() -> Self {
        Self::new(default_faqs())
    }
}

impl FaqAccordion {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self {
            entries,
            expanded: None,
        }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Answer of the expanded entry, if any.
    pub fn expanded_answer(&self) -> Option<&str> {
        self.expanded
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.answer)
    }

    /// Expand `index`, collapsing any other entry. Toggling the expanded
    /// entry collapses it. Indexes past the end are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.entries.len() {
            log::warn!("Ignoring FAQ toggle for index {}", index);
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
