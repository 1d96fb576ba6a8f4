//! DOM access errors.
//!
//! Behaviours return these internally; component handlers log and drop them
//! so a missing node never surfaces to the visitor.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no section with id `{0}`")]
    MissingSection(String),

    #[error("browser API unavailable: {0}")]
    Unsupported(&'static str),
}

pub fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}
