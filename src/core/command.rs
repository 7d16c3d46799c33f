use async_trait::async_trait;
use crate::core::library::LibraryError;

// CommandError is what a command reports back to its caller. Store failures keep their
// detail for logging only, everything else is safe to show.
#[derive(Debug)]
pub enum CommandError {
    Store {
        message: String,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        if other.is_store_failure() {
            return CommandError::Store { retryable: other.retryable(), message: other.to_string() };
        }
        match other {
            LibraryError::DuplicateKey { message } => CommandError::DuplicateKey { message },
            LibraryError::NotFound { message } => CommandError::NotFound { message },
            LibraryError::Validation { message, .. } => CommandError::Validation { message },
            // serialization problems come from malformed caller input
            other => CommandError::Validation { message: other.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("test")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("test", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_should_collapse_store_failures() {
        assert!(matches!(CommandError::from(LibraryError::unavailable("test", None, true)), CommandError::Store { retryable: true, .. }));
        assert!(matches!(CommandError::from(LibraryError::database("test", None, false)), CommandError::Store { retryable: false, .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("test", None)), CommandError::Store { retryable: false, .. }));
    }
}
