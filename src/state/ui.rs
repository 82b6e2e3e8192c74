//! Reviews panel tab selection.
//!
//! DESIGN
//! ======
//! A two-state machine with no terminal state: clicking a tab selects it, and
//! a successful review submission forces `Reviews`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs of the reviews panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewTab {
    #[default]
    Reviews,
    AddReview,
}

impl ReviewTab {
    pub const ALL: [ReviewTab; 2] = [ReviewTab::Reviews, ReviewTab::AddReview];

    pub fn label(self) -> &'static str {
        match self {
            Self::Reviews => "Reviews",
            Self::AddReview => "Add Review",
        }
    }
}

/// Tab state for one reviews panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TabsState {
    pub selected: ReviewTab,
}

impl TabsState {
    pub fn select(&mut self, tab: ReviewTab) {
        self.selected = tab;
    }

    /// Response to the review form's "sent" signal.
    pub fn show_reviews(&mut self) {
        self.selected = ReviewTab::Reviews;
    }

    pub fn is_selected(self, tab: ReviewTab) -> bool {
        self.selected == tab
    }
}
