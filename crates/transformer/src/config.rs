use serde::{Deserialize, Serialize};

use crate::assert::{DEFAULT_ERROR_TYPE, DEFAULT_MESSAGE};

/// Settings of the `@assert` transformer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AssertConfig {
    /// Error message used when the directive has no `message` argument.
    #[serde(default = "default_message")]
    pub default_message: String,

    /// Error type used when the directive has no `type` argument.
    #[serde(default = "default_error_type")]
    pub default_error_type: String,
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            default_message: default_message(),
            default_error_type: default_error_type(),
        }
    }
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_error_type() -> String {
    DEFAULT_ERROR_TYPE.to_string()
}
