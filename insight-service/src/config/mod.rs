use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;

/// Default OpenAI API base URL; overridable for tests and proxies.
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default completion model, matching the service this relay fronts for.
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, Deserialize)]
pub struct InsightConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    pub error_mode: ErrorMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

/// How provider failures surface to HTTP callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Historical behavior: failures come back as HTTP 200 with an `error`
    /// body, and callers switch on which JSON key is present.
    Compat,
    /// Failures map to distinct HTTP statuses (429, 502, 500).
    Strict,
}

impl InsightConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = core_config::is_prod();

        // An empty API key outside production does not abort startup: every
        // request then fails at call time through the error path instead.
        Ok(InsightConfig {
            common: common_config,
            openai: OpenAiConfig {
                api_key: get_env("OPENAI_API_KEY", Some(""), is_prod)?,
                api_base: get_env("OPENAI_API_BASE", Some(DEFAULT_API_BASE), is_prod)?,
                model: get_env("OPENAI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
            },
            error_mode: parse_error_mode(&get_env(
                "INSIGHT_ERROR_MODE",
                Some("compat"),
                is_prod,
            )?)?,
        })
    }
}

fn parse_error_mode(value: &str) -> Result<ErrorMode, AppError> {
    match value {
        "compat" => Ok(ErrorMode::Compat),
        "strict" => Ok(ErrorMode::Strict),
        other => Err(AppError::ConfigError(anyhow::anyhow!(
            "INSIGHT_ERROR_MODE must be 'compat' or 'strict', got '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_mode_parses_both_modes() {
        assert_eq!(parse_error_mode("compat").unwrap(), ErrorMode::Compat);
        assert_eq!(parse_error_mode("strict").unwrap(), ErrorMode::Strict);
    }

    #[test]
    fn error_mode_rejects_unknown_value() {
        assert!(parse_error_mode("lenient").is_err());
    }
}
