use std::fmt;

/// Outcome of a failed provider call
///
/// NotFound covers any non-success status from the provider, Transient covers
/// network failures and timeouts, Document covers unexpected response bodies.
#[derive(Debug)]
pub enum OWMError {
    NotFound(String),
    Transient(String),
    Document(String),
}

impl fmt::Display for OWMError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OWMError::NotFound(e) => write!(f, "OWMError::NotFound: {}", e),
            OWMError::Transient(e) => write!(f, "OWMError::Transient: {}", e),
            OWMError::Document(e) => write!(f, "OWMError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for OWMError {
    fn from(e: reqwest::Error) -> Self {
        OWMError::Transient(e.to_string())
    }
}
impl From<serde_json::Error> for OWMError {
    fn from(e: serde_json::Error) -> Self {
        OWMError::Document(e.to_string())
    }
}
