//! Errors raised while compiling a schema or scanning argument tokens.

/// Kind tag of an [`ArgsError`], independent of the data it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnexpectedArgument,
    InvalidArgumentName,
    InvalidFormat,
    MissingString,
    MissingInteger,
    InvalidInteger,
    MissingDouble,
    InvalidDouble,
}

impl ErrorCode {
    /// Schema errors are raised by the compiler; everything else by the scanner.
    pub fn is_schema_error(self) -> bool {
        matches!(self, ErrorCode::InvalidArgumentName | ErrorCode::InvalidFormat)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgsError {
    /// Flags found in the input with no definition; `flags` is sorted and deduplicated.
    #[error("Argument(s) -{flags} unexpected.")]
    UnexpectedArgument { flags: String },
    #[error("Bad character: '{id}' in Args format: '{schema}'.")]
    InvalidArgumentName { id: char, schema: String },
    #[error("Argument: '{id}' has invalid format: '{format}'.")]
    InvalidFormat { id: char, format: String },
    #[error("Could not find string parameter for -{id}.")]
    MissingString { id: char },
    #[error("Could not find integer parameter for -{id}.")]
    MissingInteger { id: char },
    #[error("Argument -{id} expects an integer but was '{value}'.")]
    InvalidInteger { id: char, value: String },
    #[error("Could not find double parameter for -{id}.")]
    MissingDouble { id: char },
    #[error("Argument -{id} expects a double but was '{value}'.")]
    InvalidDouble { id: char, value: String },
}

impl ArgsError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ArgsError::UnexpectedArgument { .. } => ErrorCode::UnexpectedArgument,
            ArgsError::InvalidArgumentName { .. } => ErrorCode::InvalidArgumentName,
            ArgsError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ArgsError::MissingString { .. } => ErrorCode::MissingString,
            ArgsError::MissingInteger { .. } => ErrorCode::MissingInteger,
            ArgsError::InvalidInteger { .. } => ErrorCode::InvalidInteger,
            ArgsError::MissingDouble { .. } => ErrorCode::MissingDouble,
            ArgsError::InvalidDouble { .. } => ErrorCode::InvalidDouble,
        }
    }

    /// The flag that triggered the error. `None` when the error is not tied to one flag.
    pub fn argument_id(&self) -> Option<char> {
        match self {
            ArgsError::UnexpectedArgument { .. } => None,
            ArgsError::InvalidArgumentName { id, .. }
            | ArgsError::InvalidFormat { id, .. }
            | ArgsError::MissingString { id }
            | ArgsError::MissingInteger { id }
            | ArgsError::InvalidInteger { id, .. }
            | ArgsError::MissingDouble { id }
            | ArgsError::InvalidDouble { id, .. } => Some(*id),
        }
    }

    /// Context text: the schema, the bad suffix, the rejected token or the unexpected flags.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            ArgsError::UnexpectedArgument { flags } => Some(flags.as_str()),
            ArgsError::InvalidArgumentName { schema, .. } => Some(schema.as_str()),
            ArgsError::InvalidFormat { format, .. } => Some(format.as_str()),
            ArgsError::InvalidInteger { value, .. } | ArgsError::InvalidDouble { value, .. } => {
                Some(value.as_str())
            }
            ArgsError::MissingString { .. }
            | ArgsError::MissingInteger { .. }
            | ArgsError::MissingDouble { .. } => None,
        }
    }
}
