use std::fmt;

#[derive(Debug)]
pub enum SMHIError {
    Request(String),
    Status(String),
    Document(String),
}

impl fmt::Display for SMHIError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SMHIError::Request(e) => write!(f, "SMHIError::Request: {}", e),
            SMHIError::Status(e) => write!(f, "SMHIError::Status: {}", e),
            SMHIError::Document(e) => write!(f, "SMHIError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for SMHIError {
    fn from(e: reqwest::Error) -> Self {
        SMHIError::Request(e.to_string())
    }
}
impl From<serde_json::Error> for SMHIError {
    fn from(e: serde_json::Error) -> Self {
        SMHIError::Document(e.to_string())
    }
}
