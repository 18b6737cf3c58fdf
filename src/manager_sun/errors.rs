use std::fmt;

#[derive(Debug)]
pub enum SunError {
    Request(String),
    Status(String),
    Document(String),
}

impl fmt::Display for SunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SunError::Request(e) => write!(f, "SunError::Request: {}", e),
            SunError::Status(e) => write!(f, "SunError::Status: {}", e),
            SunError::Document(e) => write!(f, "SunError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for SunError {
    fn from(e: reqwest::Error) -> Self {
        SunError::Request(e.to_string())
    }
}
impl From<serde_json::Error> for SunError {
    fn from(e: serde_json::Error) -> Self {
        SunError::Document(e.to_string())
    }
}
