//! Player domain errors

use thiserror::Error;

use crate::data::DataError;
use crate::data::filters::FilterError;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Player {0} not found")]
    NotFound(i64),

    #[error("Store error: {0}")]
    Store(#[from] DataError),
}

impl PlayerError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameters(message.into())
    }
}

impl From<FilterError> for PlayerError {
    fn from(e: FilterError) -> Self {
        Self::InvalidParameters(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::PlayerOrder;

    #[test]
    fn test_display() {
        assert_eq!(PlayerError::NotFound(7).to_string(), "Player 7 not found");
        assert_eq!(
            PlayerError::invalid("name must be 1-12 characters").to_string(),
            "Invalid parameters: name must be 1-12 characters"
        );
    }

    #[test]
    fn test_filter_error_becomes_invalid_parameters() {
        let err: PlayerError = "height".parse::<PlayerOrder>().unwrap_err().into();
        assert!(matches!(err, PlayerError::InvalidParameters(ref m) if m == "Unknown order: height"));
    }
}
