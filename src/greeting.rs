use crate::error::SdkError;

pub const TITLE: &str = "GoMobile Awesomeness";

const NO_NAME_MESSAGE: &str = "I will not greet someone with no name.";

/// Greet `to`. Only the empty string is rejected.
pub fn say_hello(to: &str) -> Result<String, SdkError> {
    if to.is_empty() {
        return Err(SdkError::InvalidInput(NO_NAME_MESSAGE.to_string()));
    }

    Ok(format!("Hello, {}!", to))
}
