pub mod artists;
pub mod shows;
pub mod venues;

use serde::Deserialize;
use thiserror::Error;

/// Rejection produced when a submission fails required/shape constraints.
/// Surfaced to the caller as a 400 so the form can be corrected and resent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("at least one genre must be provided")]
    NoGenres,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
}

impl SearchQuery {
    pub fn term(&self) -> &str {
        self.term.as_deref().unwrap_or("")
    }
}
