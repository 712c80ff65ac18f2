//! Environment variable expansion for configuration strings.
//!
//! Supports `${VAR}` (errors if unset) and `${VAR:-default}`. Bare `$VAR`
//! without braces is left untouched.

use crate::ConfigError;

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

/// Expand `${VAR}` references in a configuration value.
///
/// `field` names the config field for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    // Fast path: no expansion needed
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}
