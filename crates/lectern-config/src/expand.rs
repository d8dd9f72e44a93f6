//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use std::borrow::Cow;

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Only braced `${...}` references are expanded. Bare `$VAR` and an
/// unterminated `${` are kept as written, so URLs containing `$` survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let end = start + len + 1;
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..end], field)?);
        rest = &rest[end..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand a single `${VAR}` or `${VAR:-default}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Lookup failure for an unset variable.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LECTERN_TEST_COMMIT", "abc123");
        }
        let result = expand_env("${LECTERN_TEST_COMMIT}", "site.commit").unwrap();
        assert_eq!(result, "abc123");
        unsafe {
            std::env::remove_var("LECTERN_TEST_COMMIT");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LECTERN_UNSET_BRANCH");
        }
        let result = expand_env("${LECTERN_UNSET_BRANCH:-master}", "site.commit").unwrap();
        assert_eq!(result, "master");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LECTERN_MISSING_REPO");
        }
        let err = expand_env("${LECTERN_MISSING_REPO}", "site.repository").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("LECTERN_MISSING_REPO"));
        assert!(err.to_string().contains("site.repository"));
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LECTERN_TEST_ORG", "Uniswap");
        }
        let result = expand_env("https://github.com/${LECTERN_TEST_ORG}/docs", "site.repository")
            .unwrap();
        assert_eq!(result, "https://github.com/Uniswap/docs");
        unsafe {
            std::env::remove_var("LECTERN_TEST_ORG");
        }
    }

    #[test]
    fn test_bare_dollar_kept_next_to_braced_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LECTERN_UNSET_SEGMENT");
        }
        let result = expand_env(
            "https://example.com/$path/${LECTERN_UNSET_SEGMENT:-x}",
            "site.repository",
        )
        .unwrap();
        assert_eq!(result, "https://example.com/$path/x");
    }

    #[test]
    fn test_unterminated_reference_kept() {
        let result = expand_env("https://example.com/${open", "site.repository").unwrap();
        assert_eq!(result, "https://example.com/${open");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("https://example.com/$path", "site.repository").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }
}
