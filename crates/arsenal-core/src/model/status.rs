use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::SnippetError;

/// Maturity of a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Written down but not exercised yet
    #[default]
    Draft,
    /// Exercised at least once
    Tested,
    /// Used in production code
    Prod,
}

impl Status {
    /// All statuses in display order
    pub const ALL: [Status; 3] = [Status::Draft, Status::Tested, Status::Prod];

    /// Canonical lowercase form, as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Tested => "tested",
            Status::Prod => "prod",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SnippetError::InvalidStatus {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_draft() {
        assert_eq!(Status::default(), Status::Draft);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" Tested ".parse::<Status>().unwrap(), Status::Tested);
        assert_eq!("PROD".parse::<Status>().unwrap(), Status::Prod);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "shipped".parse::<Status>().unwrap_err();
        assert!(matches!(err, SnippetError::InvalidStatus { value } if value == "shipped"));
    }

    #[test]
    fn test_as_str_round_trips_through_parse() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Status::Prod).unwrap();
        assert_eq!(json, "\"prod\"");
    }
}
