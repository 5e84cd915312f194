use crate::errors::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the search and replacement parts of a `replace` parameter.
pub const REPLACE_DELIMITER: char = '|';

/// The six renaming actions a rule can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Prefix,
    Suffix,
    Replace,
    Extension,
    Lowercase,
    Uppercase,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::Replace => "replace",
            Self::Extension => "extension",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix" => Ok(Self::Prefix),
            "suffix" => Ok(Self::Suffix),
            "replace" => Ok(Self::Replace),
            "extension" => Ok(Self::Extension),
            "lowercase" => Ok(Self::Lowercase),
            "uppercase" => Ok(Self::Uppercase),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

/// One renaming transformation: an action plus its string parameter.
///
/// The parameter encoding is action-specific: `replace` packs
/// `search|replacement`, `extension` is the new extension without the dot,
/// and the case-folding actions ignore it entirely. A rule is immutable
/// once constructed and lives for the duration of a single batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub action: Action,
    pub parameter: String,
}

impl Rule {
    pub fn new(action: Action, parameter: impl Into<String>) -> Self {
        Self {
            action,
            parameter: parameter.into(),
        }
    }

    /// Split a `replace` parameter into its search and replacement parts.
    ///
    /// Fails unless the parameter contains exactly one delimiter, i.e.
    /// splits into exactly two parts (either of which may be empty).
    pub(crate) fn replace_parts(&self) -> Result<(&str, &str), Error> {
        let parts: Vec<&str> = self.parameter.split(REPLACE_DELIMITER).collect();
        match parts.as_slice() {
            [search, replacement] => Ok((search, replacement)),
            _ => Err(Error::InvalidParameter {
                action: Action::Replace.as_str(),
                reason: format!(
                    "expected exactly two parts separated by '{}', got {}",
                    REPLACE_DELIMITER,
                    parts.len()
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_str() {
        assert_eq!("prefix".parse::<Action>().unwrap(), Action::Prefix);
        assert_eq!("uppercase".parse::<Action>().unwrap(), Action::Uppercase);
    }

    #[test]
    fn test_action_from_str_rejects_unknown() {
        let err = "titlecase".parse::<Action>().unwrap_err();
        assert!(matches!(err, Error::UnknownAction(ref s) if s == "titlecase"));
    }

    #[test]
    fn test_action_from_str_is_case_sensitive() {
        assert!("Prefix".parse::<Action>().is_err());
    }

    #[test]
    fn test_replace_parts() {
        let rule = Rule::new(Action::Replace, "old|new");
        assert_eq!(rule.replace_parts().unwrap(), ("old", "new"));
    }

    #[test]
    fn test_replace_parts_allows_empty_replacement() {
        let rule = Rule::new(Action::Replace, "draft_|");
        assert_eq!(rule.replace_parts().unwrap(), ("draft_", ""));
    }

    #[test]
    fn test_replace_parts_rejects_missing_delimiter() {
        let rule = Rule::new(Action::Replace, "onlyonepart");
        assert!(matches!(
            rule.replace_parts().unwrap_err(),
            Error::InvalidParameter { .. }
        ));
    }

    #[test]
    fn test_replace_parts_rejects_extra_delimiter() {
        let rule = Rule::new(Action::Replace, "a|b|c");
        assert!(rule.replace_parts().is_err());
    }

    #[test]
    fn test_rule_serde_round_trip() {
        let rule = Rule::new(Action::Extension, "txt");
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"extension\""));
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}
