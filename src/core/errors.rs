use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepwiseError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("HTTP error {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Failure the backend described itself, e.g. "Invalid credentials".
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("PrepwiseError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for PrepwiseError {
    fn from(error: std::io::Error) -> Self {
        PrepwiseError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for PrepwiseError {
    fn from(error: reqwest::Error) -> Self {
        PrepwiseError::Reqwest(Box::new(error))
    }
}
