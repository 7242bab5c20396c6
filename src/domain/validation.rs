use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptySenderId,
    EmptyContent,
    EmptyDestination,
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySenderId => f.write_str("sender id must not be empty"),
            Self::EmptyContent => f.write_str("message content must not be empty"),
            Self::EmptyDestination => f.write_str("destination must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            ValidationError::EmptySenderId.to_string(),
            "sender id must not be empty"
        );
        assert_eq!(
            ValidationError::EmptyContent.to_string(),
            "message content must not be empty"
        );
        assert_eq!(
            ValidationError::EmptyDestination.to_string(),
            "destination must not be empty"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
