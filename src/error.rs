use thiserror::Error;

/// Errors the SDK reports to its callers.
///
/// The `Display` text is what a mobile host receives as the exception message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("cannot compute a quotient with a zero divisor")]
    DivideByZero,

    #[error("no MathResult is registered for handle {0}")]
    UnknownHandle(i64),
}
