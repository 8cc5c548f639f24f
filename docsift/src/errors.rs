use backtrace::Backtrace;
use serde::{de, ser};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

/// Error kinds for docsift operations
///
/// Every failure aborts the query that raised it. There is no partial result:
/// a query either returns its full result set or one of these errors.
///
/// # Examples
///
/// ```rust,ignore
/// use docsift::errors::{DocSiftError, ErrorKind, DocSiftResult};
///
/// fn example() -> DocSiftResult<()> {
///     Err(DocSiftError::new("$xor is not supported", ErrorKind::UnsupportedOperator("$xor".into())))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// A `$`-prefixed key the evaluator does not recognize. Carries the key.
    UnsupportedOperator(String),
    /// A comparison between operands that cannot be ordered (strict mode only)
    TypeMismatch,
    /// A reserved operator (`$in`, `$ne`, ...) that has no implementation yet.
    /// Carries the key.
    NotImplemented(String),
    /// The filter expression is structurally malformed
    InvalidQuery,
    /// The query options are malformed
    InvalidOptions,
    /// Invalid configuration value
    InvalidConfig,
    /// Error encoding or decoding data
    EncodingError,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::UnsupportedOperator(op) => write!(f, "Unsupported operator {}", op),
            ErrorKind::TypeMismatch => write!(f, "Type mismatch"),
            ErrorKind::NotImplemented(op) => write!(f, "Operator {} not implemented", op),
            ErrorKind::InvalidQuery => write!(f, "Invalid query"),
            ErrorKind::InvalidOptions => write!(f, "Invalid options"),
            ErrorKind::InvalidConfig => write!(f, "Invalid configuration"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom docsift error type.
///
/// `DocSiftError` carries a message, an [ErrorKind] and an optional cause.
/// A backtrace is captured at construction for debugging.
///
/// # Examples
///
/// ```rust,ignore
/// use docsift::errors::{DocSiftError, ErrorKind};
///
/// let err = DocSiftError::new("$and expects an array", ErrorKind::InvalidQuery);
///
/// let cause = DocSiftError::new("expected value at line 1", ErrorKind::EncodingError);
/// let err = DocSiftError::new_with_cause("Invalid filter json", ErrorKind::InvalidQuery, cause);
/// ```
#[derive(Clone)]
pub struct DocSiftError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<DocSiftError>>,
    backtrace: Backtrace,
}

impl DocSiftError {
    /// Creates a new `DocSiftError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        DocSiftError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: Backtrace::new(),
        }
    }

    /// Creates a new `DocSiftError` wrapping a cause error.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: DocSiftError) -> Self {
        DocSiftError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: Backtrace::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&DocSiftError> {
        self.cause.as_deref()
    }
}

impl Display for DocSiftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for DocSiftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{} ({})\nCaused by: {:?}", self.message, self.error_kind, cause),
            None => write!(f, "{} ({})\n{:?}", self.message, self.error_kind, self.backtrace),
        }
    }
}

impl Error for DocSiftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for docsift operations.
pub type DocSiftResult<T> = Result<T, DocSiftError>;

impl de::Error for DocSiftError {
    fn custom<T: Display>(msg: T) -> Self {
        DocSiftError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl ser::Error for DocSiftError {
    fn custom<T: Display>(msg: T) -> Self {
        DocSiftError::new(&msg.to_string(), ErrorKind::EncodingError)
    }
}

impl From<serde_json::Error> for DocSiftError {
    fn from(err: serde_json::Error) -> Self {
        DocSiftError::new(&format!("JSON error: {}", err), ErrorKind::EncodingError)
    }
}

impl From<String> for DocSiftError {
    fn from(msg: String) -> Self {
        DocSiftError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for DocSiftError {
    fn from(msg: &str) -> Self {
        DocSiftError::new(msg, ErrorKind::InternalError)
    }
}
