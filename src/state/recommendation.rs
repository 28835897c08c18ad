//! Recommendation form submission.
//!
//! The site has no backend, so a "submission" only validates the fields and
//! produces the acknowledgement shown to the visitor.

#[cfg(test)]
#[path = "recommendation_test.rs"]
mod recommendation_test;

use thiserror::Error;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recommendation {
    pub name: String,
    pub email: String,
    pub text: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendationError {
    #[error("Please fill in your name and recommendation text.")]
    MissingRequired,
}

impl Recommendation {
    /// Check the required fields and build the acknowledgement message.
    ///
    /// Only emptiness is checked; whitespace-only input counts as filled in.
    /// Email is optional.
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::MissingRequired`] when name or text is empty.
    pub fn acknowledge(&self) -> Result<String, RecommendationError> {
        if self.name.is_empty() || self.text.is_empty() {
            return Err(RecommendationError::MissingRequired);
        }
        Ok(format!(
            "Thank you for your recommendation, {}! It has been submitted for review.",
            self.name
        ))
    }
}
