use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Provider {
    Apple,
    Google,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no such provider: {0:?}")]
pub struct UnknownProvider(pub String);

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Apple, Provider::Google];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Apple => "APPLE",
            Provider::Google => "GOOGLE",
        }
    }

    /// Whole-string, case-insensitive match against the canonical names.
    /// Surrounding whitespace is not trimmed.
    pub fn parse(value: &str) -> Result<Self, UnknownProvider> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownProvider(value.to_string()))
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Provider::parse(value)
    }
}
