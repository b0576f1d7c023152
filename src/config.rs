use graphassert_transformer::AssertConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Directory to write resolver templates into.
    #[serde(default)]
    pub output: Option<String>,

    #[serde(default)]
    pub assert: AssertConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config.output, None);
        assert_eq!(config.assert, AssertConfig::default());
        assert_eq!(config.assert.default_message, "Input assertion error");
        assert_eq!(config.assert.default_error_type, "AssertionError");
    }

    #[test]
    fn assert_section() {
        let config = toml::from_str::<Config>(
            r#"
            output = "build"

            [assert]
            default_message = "Invalid input"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.as_deref(), Some("build"));
        assert_eq!(config.assert.default_message, "Invalid input");
        assert_eq!(config.assert.default_error_type, "AssertionError");
    }
}
