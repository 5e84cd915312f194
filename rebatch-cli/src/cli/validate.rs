use anyhow::{bail, Result};
use rebatch_core::REPLACE_DELIMITER;

/// Reject patterns too short to be meaningful globs.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.len() < 2 {
        bail!("pattern '{}' is too short (try something like '*.png')", pattern);
    }
    Ok(())
}

/// Check the parameter's action-specific syntax before the rule reaches the
/// engine, and normalize it to the engine's single-string encoding.
///
/// Unknown action names are passed through untouched; the engine rejects
/// them with its own message.
pub fn validate_rule_input(action: &str, parameter: Option<&str>) -> Result<String> {
    match action {
        "prefix" | "suffix" => match parameter {
            Some(p) if !p.is_empty() => Ok(p.to_string()),
            _ => bail!("action '{}' needs a non-empty parameter", action),
        },
        "replace" => match parameter {
            Some(p) if p.matches(REPLACE_DELIMITER).count() == 1 => Ok(p.to_string()),
            Some(_) => bail!(
                "replace parameter must be 'search{}replacement'",
                REPLACE_DELIMITER
            ),
            None => bail!("action 'replace' needs a 'search|replacement' parameter"),
        },
        "extension" => match parameter {
            Some(p) if p.is_empty() => bail!("action 'extension' needs a non-empty parameter"),
            Some(p) if p.contains('.') => {
                bail!("write the new extension without its dot (got '{}')", p)
            },
            Some(p) => Ok(p.to_string()),
            None => bail!("action 'extension' needs a non-empty parameter"),
        },
        "lowercase" | "uppercase" => match parameter {
            None => Ok(String::new()),
            Some(_) => bail!("action '{}' takes no parameter", action),
        },
        _ => Ok(parameter.unwrap_or_default().to_string()),
    }
}
