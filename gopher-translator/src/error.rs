/// Error types for the Gopher translator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GopherError {
    /// Input for the single-word path contained more than one word
    NotASingleWord(String),
}

impl std::fmt::Display for GopherError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GopherError::NotASingleWord(input) => {
                write!(f, "Expected a single word, got '{}'", input)
            }
        }
    }
}

impl std::error::Error for GopherError {}

/// Result type for translator operations
pub type GopherResult<T> = Result<T, GopherError>;
