//! Review records and the review form draft.
//!
//! DESIGN
//! ======
//! Validation is presence-only: a name must be typed and a rating picked.
//! Failures replace the draft's error list on every attempt; success clears
//! the draft and hands back the finished `Review` for publishing.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use serde::{Deserialize, Serialize};

/// Label of the "no rating chosen" option.
pub const RATING_PLACEHOLDER: &str = "Please select!";

/// Ratings offered by the form, in display order.
pub const RATING_CHOICES: [u8; 5] = [5, 4, 3, 2, 1];

/// A submitted review. Never edited or removed once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub review: Option<String>,
    pub rating: u8,
}

/// Validation failures, in the order they are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("Name required.")]
    NameRequired,
    #[error("Rating required.")]
    RatingRequired,
}

/// In-progress form fields plus the errors from the last submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub name: String,
    pub review: String,
    /// `None` while the placeholder option is selected.
    pub rating: Option<u8>,
    pub errors: Vec<ReviewError>,
}

impl ReviewDraft {
    /// Validate and, on success, reset the fields and return the review.
    pub fn submit(&mut self) -> Option<Review> {
        self.errors.clear();
        match (self.name.is_empty(), self.rating) {
            (false, Some(rating)) => {
                let review = Review {
                    name: std::mem::take(&mut self.name),
                    review: Some(std::mem::take(&mut self.review)).filter(|text| !text.is_empty()),
                    rating,
                };
                self.rating = None;
                Some(review)
            }
            (name_missing, rating) => {
                if name_missing {
                    self.errors.push(ReviewError::NameRequired);
                }
                if rating.is_none() {
                    self.errors.push(ReviewError::RatingRequired);
                }
                None
            }
        }
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Map a rating `<select>` value to a rating; the placeholder maps to `None`.
pub fn parse_rating(value: &str) -> Option<u8> {
    value.parse::<u8>().ok().filter(|r| RATING_CHOICES.contains(r))
}

/// `<select>` value for the current rating.
pub fn rating_value(rating: Option<u8>) -> String {
    rating.map_or_else(|| RATING_PLACEHOLDER.to_owned(), |r| r.to_string())
}

/// Heading above the error list; singular for one error.
pub fn error_heading(count: usize) -> &'static str {
    if count == 1 {
        "Please correct the following error"
    } else {
        "Please correct the following errors"
    }
}
