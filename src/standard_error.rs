use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StandardError {
    pub title: String,
    pub message: String,
}

impl StandardError {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StandardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {}: {}", self.title, self.message)
    }
}

impl std::error::Error for StandardError {}

impl From<std::io::Error> for StandardError {
    fn from(error: std::io::Error) -> Self {
        Self::new("I/O", error.to_string())
    }
}

impl From<glob::PatternError> for StandardError {
    fn from(error: glob::PatternError) -> Self {
        Self::new("Glob", error.to_string())
    }
}

impl From<serde_json::Error> for StandardError {
    fn from(error: serde_json::Error) -> Self {
        Self::new("JSON", error.to_string())
    }
}

impl From<csv::Error> for StandardError {
    fn from(error: csv::Error) -> Self {
        Self::new("CSV", error.to_string())
    }
}
